use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use enumset::{EnumSet, EnumSetType};

use crate::prelude::*;

/// Public lab desktops, in the map order.
#[derive(Debug, Hash, PartialOrd, Ord, EnumSetType)]
pub enum Desktop {
    Sinkhole,
    Destruction,
    Firewhirl,
    Outbreak,
    Cyclone,
    Venom,
    Drought,
    Volcano,
    Blight,
    Hailstorm,
    Arsenic,
    Heatwave,
    Cyanide,
    Acid,
    Invasion,
    Eruption,
    Headcrash,
    Asteroid,
    Avalanche,
    Blackout,
    Plague,
    Bigbang,
    Wildfire,
    Famine,
    Madcow,
    Surge,
    Meteorstorm,
    Chaos,
    Blizzard,
    Hurricane,
}

impl Desktop {
    /// Host name as reported by the lab API.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sinkhole => "sinkhole",
            Self::Destruction => "destruction",
            Self::Firewhirl => "firewhirl",
            Self::Outbreak => "outbreak",
            Self::Cyclone => "cyclone",
            Self::Venom => "venom",
            Self::Drought => "drought",
            Self::Volcano => "volcano",
            Self::Blight => "blight",
            Self::Hailstorm => "hailstorm",
            Self::Arsenic => "arsenic",
            Self::Heatwave => "heatwave",
            Self::Cyanide => "cyanide",
            Self::Acid => "acid",
            Self::Invasion => "invasion",
            Self::Eruption => "eruption",
            Self::Headcrash => "headcrash",
            Self::Asteroid => "asteroid",
            Self::Avalanche => "avalanche",
            Self::Blackout => "blackout",
            Self::Plague => "plague",
            Self::Bigbang => "bigbang",
            Self::Wildfire => "wildfire",
            Self::Famine => "famine",
            Self::Madcow => "madcow",
            Self::Surge => "surge",
            Self::Meteorstorm => "meteorstorm",
            Self::Chaos => "chaos",
            Self::Blizzard => "blizzard",
            Self::Hurricane => "hurricane",
        }
    }

    /// Map region of the desktop.
    ///
    /// There are no `c30` and `c31` on the floor plan.
    #[must_use]
    pub const fn region_id(self) -> &'static str {
        match self {
            Self::Sinkhole => "c1",
            Self::Destruction => "c2",
            Self::Firewhirl => "c3",
            Self::Outbreak => "c4",
            Self::Cyclone => "c5",
            Self::Venom => "c6",
            Self::Drought => "c7",
            Self::Volcano => "c8",
            Self::Blight => "c9",
            Self::Hailstorm => "c10",
            Self::Arsenic => "c11",
            Self::Heatwave => "c12",
            Self::Cyanide => "c13",
            Self::Acid => "c14",
            Self::Invasion => "c15",
            Self::Eruption => "c16",
            Self::Headcrash => "c17",
            Self::Asteroid => "c18",
            Self::Avalanche => "c19",
            Self::Blackout => "c20",
            Self::Plague => "c21",
            Self::Bigbang => "c22",
            Self::Wildfire => "c23",
            Self::Famine => "c24",
            Self::Madcow => "c25",
            Self::Surge => "c26",
            Self::Meteorstorm => "c27",
            Self::Chaos => "c28",
            Self::Blizzard => "c29",
            Self::Hurricane => "c32",
        }
    }
}

impl Display for Desktop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Desktop {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        EnumSet::<Self>::all()
            .iter()
            .find(|desktop| desktop.name() == name)
            .with_context(|| format!("unknown desktop `{name}`"))
    }
}

/// Parse the known desktops, reporting and skipping the unknown ones.
pub fn parse_known<'a>(names: impl IntoIterator<Item = &'a str>) -> EnumSet<Desktop> {
    names
        .into_iter()
        .filter_map(|name| {
            name.parse::<Desktop>()
                .inspect_err(|error| warn!("skipping: {error:#}"))
                .ok()
        })
        .collect()
}
