use std::fmt::{Display, Formatter};

use comfy_table::Color;
use enumset::EnumSet;

use crate::desktop::Desktop;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Status {
    Occupied,
    Available,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Occupied => write!(f, "occupied"),
            Self::Available => write!(f, "available"),
        }
    }
}

impl Status {
    pub const fn color(self) -> Color {
        match self {
            Self::Occupied => Color::Red,
            Self::Available => Color::Green,
        }
    }
}

/// Desktops shown as taken on the map.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Occupancy(EnumSet<Desktop>);

impl Occupancy {
    /// Desktops in `always_occupied` are shown as taken regardless of what the lab reports.
    pub fn new(in_use: EnumSet<Desktop>, always_occupied: EnumSet<Desktop>) -> Self {
        Self(in_use | always_occupied)
    }

    #[must_use]
    pub fn status(self, desktop: Desktop) -> Status {
        if self.0.contains(desktop) { Status::Occupied } else { Status::Available }
    }

    #[must_use]
    pub fn n_available(self) -> usize {
        self.0.complement().len()
    }

    /// All desktops in the map order along with their status.
    pub fn statuses(self) -> impl Iterator<Item = (Desktop, Status)> {
        EnumSet::<Desktop>::all().iter().map(move |desktop| (desktop, self.status(desktop)))
    }
}
