//! Today's [`Schedule`], replaced wholesale once per day.
//!
//! Readers always see either the previous or the next schedule, never a mix of both.

use std::sync::Arc;

use tokio::sync::watch;

use crate::{prelude::*, schedule::Schedule};

pub fn new(schedule: Schedule) -> (Publisher, Subscriber) {
    let (sender, receiver) = watch::channel(Arc::new(schedule));
    (Publisher(sender), Subscriber(receiver))
}

pub struct Publisher(watch::Sender<Arc<Schedule>>);

impl Publisher {
    #[instrument(skip_all, fields(n_ranges = schedule.ranges().len()))]
    pub fn replace(&self, schedule: Schedule) {
        info!(?schedule, "publishing the new schedule…");
        self.0.send_replace(Arc::new(schedule));
    }
}

pub struct Subscriber(watch::Receiver<Arc<Schedule>>);

impl Subscriber {
    #[must_use]
    pub fn current(&self) -> Arc<Schedule> {
        Arc::clone(&self.0.borrow())
    }

    /// Wait for the next replacement.
    pub async fn changed(&mut self) -> Result {
        self.0.changed().await.context("the schedule publisher is gone")
    }
}
