use std::{pin::pin, sync::Arc, time::Duration};

use bon::Builder;
use chrono::{Local, NaiveTime};
use clap::Parser;
use enumset::EnumSet;
use tokio::{
    select,
    signal,
    sync::mpsc,
    time::{MissedTickBehavior, interval, sleep},
};

use crate::{
    api::ocf,
    clock::ClockFace,
    cli::{ApiArgs, OccupancyArgs},
    desktop::Desktop,
    occupancy::Occupancy,
    prelude::*,
    refresh,
    schedule::snapshot::{self, Publisher, Subscriber},
    tables::{build_hours_table, build_map_table},
    theme::Theme,
    time::Time,
};

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(flatten)]
    api: ApiArgs,

    #[clap(flatten)]
    occupancy: OccupancyArgs,

    #[clap(long, env = "POLLING_INTERVAL", default_value = "2500ms")]
    polling_interval: humantime::Duration,

    /// Local time at which today's opening hours get fetched again.
    #[clap(long, env = "REFRESH_AT", default_value = "06:00:00")]
    refresh_at: NaiveTime,
}

impl WatchArgs {
    pub async fn run(self) -> Result {
        let api = Arc::new(self.api.new_client()?);
        let schedule = api.get_hours_today().await.context("failed to fetch today's hours")?;
        let (publisher, subscriber) = snapshot::new(schedule);
        tokio::spawn(refresh_daily(Arc::clone(&api), publisher, self.refresh_at));

        let (sender, occupancies) = mpsc::channel(1);
        let fetch = move || {
            let api = Arc::clone(&api);
            async move { api.get_desktops_in_use().await }
        };
        tokio::spawn(
            DesktopPoller::builder()
                .always_occupied(self.occupancy.always_occupied())
                .polling_interval(self.polling_interval)
                .sender(sender)
                .build()
                .run(fetch),
        );

        Watcher { schedule: subscriber, occupancies }.run().await
    }
}

/// Replace the schedule snapshot every day at `at`.
#[instrument(skip_all, fields(at = %at))]
async fn refresh_daily(api: Arc<ocf::Api>, publisher: Publisher, at: NaiveTime) {
    loop {
        let delay = refresh::until_next(Local::now().naive_local(), at);
        info!(%delay, "waiting for the next refresh…");
        sleep(delay.to_std().unwrap_or_default()).await;

        match api.get_hours_today().await {
            Ok(schedule) => publisher.replace(schedule),
            Err(error) => warn!("failed to refresh the hours, keeping the old ones: {error:#}"),
        }

        // Do not fire twice within the same second:
        sleep(Duration::from_secs(1)).await;
    }
}

/// Background desktop polling, sends only the changed occupancies.
#[derive(Builder)]
struct DesktopPoller {
    always_occupied: EnumSet<Desktop>,
    sender: mpsc::Sender<Occupancy>,

    #[builder(into)]
    polling_interval: Duration,
}

impl DesktopPoller {
    async fn run<F, R>(self, fetch: F)
    where
        F: Fn() -> R,
        R: Future<Output = Result<EnumSet<Desktop>>>,
    {
        let mut polling = interval(self.polling_interval);
        polling.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_occupancy = None;

        loop {
            polling.tick().await;
            match fetch().await {
                Ok(in_use) => {
                    let occupancy = Occupancy::new(in_use, self.always_occupied);
                    if last_occupancy != Some(occupancy) {
                        last_occupancy = Some(occupancy);
                        if self.sender.send(occupancy).await.is_err() {
                            debug!("the display is gone");
                            return;
                        }
                    }
                }
                Err(error) => {
                    warn!("failed to poll the desktops: {error:#}");
                }
            }
        }
    }
}

struct Watcher {
    schedule: Subscriber,
    occupancies: mpsc::Receiver<Occupancy>,
}

impl Watcher {
    async fn run(mut self) -> Result {
        let mut clock = interval(Duration::from_secs(1));
        clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut shutdown = pin!(signal::ctrl_c());
        let mut theme = None;

        {
            let schedule = self.schedule.current();
            let now = Time::from(Local::now().time());
            println!("{}", build_hours_table(&schedule, Theme::at(&schedule, now)));
        }

        loop {
            select! {
                _ = clock.tick() => {
                    let now = Local::now().time();
                    debug!(clock = %ClockFace(now));
                    let schedule = self.schedule.current();
                    let new_theme = Theme::at(&schedule, Time::from(now));
                    if theme != Some(new_theme) {
                        info!(theme = %new_theme, "switching the theme");
                        theme = Some(new_theme);
                    }
                }

                Some(occupancy) = self.occupancies.recv() => {
                    info!(n_available = occupancy.n_available(), "occupancy changed");
                    println!("{}", build_map_table(occupancy));
                }

                result = self.schedule.changed() => {
                    result?;
                    let schedule = self.schedule.current();
                    let current_theme = Theme::at(&schedule, Time::from(Local::now().time()));
                    println!("{}", build_hours_table(&schedule, current_theme));
                }

                result = &mut shutdown => {
                    result.context("failed to listen for Ctrl+C")?;
                    info!("interrupted");
                    return Ok(());
                }
            }
        }
    }
}
