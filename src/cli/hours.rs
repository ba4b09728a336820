use chrono::Local;
use clap::Parser;

use crate::{cli::ApiArgs, prelude::*, tables::build_hours_table, theme::Theme, time::Time};

#[derive(Parser)]
pub struct HoursArgs {
    #[clap(flatten)]
    pub api: ApiArgs,
}

impl HoursArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let schedule = self.api.new_client()?.get_hours_today().await?;
        let now = Time::from(Local::now().time());
        let theme = Theme::at(&schedule, now);
        info!(is_open = schedule.is_open(now), %theme, "gotcha");
        println!("{}", build_hours_table(&schedule, theme));
        Ok(())
    }
}
