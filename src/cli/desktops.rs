use clap::Parser;

use crate::{
    cli::{ApiArgs, OccupancyArgs},
    occupancy::Occupancy,
    prelude::*,
    tables::build_map_table,
};

#[derive(Parser)]
pub struct DesktopsArgs {
    #[clap(flatten)]
    pub api: ApiArgs,

    #[clap(flatten)]
    pub occupancy: OccupancyArgs,
}

impl DesktopsArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let in_use = self.api.new_client()?.get_desktops_in_use().await?;
        let occupancy = Occupancy::new(in_use, self.occupancy.always_occupied());
        info!(n_available = occupancy.n_available(), "gotcha");
        println!("{}", build_map_table(occupancy));
        Ok(())
    }
}
