use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::{schedule::Schedule, time::Time};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Theme {
    Day,

    /// The lab is closed.
    Night,
}

impl Theme {
    pub fn at(schedule: &Schedule, now: Time) -> Self {
        if schedule.is_open(now) { Self::Day } else { Self::Night }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Day => Color::Yellow,
            Self::Night => Color::DarkBlue,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}
