use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use chrono::{NaiveTime, Timelike};
use itertools::Itertools;

use crate::prelude::*;

/// Local wall-clock time as seconds since midnight.
///
/// The value is never normalized: `25:00:00` and `9:75` are encoded as-is,
/// and the formatter reflects their raw decomposition.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[must_use]
pub struct Time(u32);

impl Time {
    pub const MIDNIGHT: Self = Self(0);

    pub const fn from_seconds(seconds: u32) -> Self {
        Self(seconds)
    }

    #[allow(dead_code)]
    pub const fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self(hour * 3600 + minute * 60 + second)
    }

    #[allow(dead_code)]
    #[must_use]
    pub const fn seconds(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u32 {
        self.0 / 3600
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        (self.0 % 3600) / 60
    }

    #[must_use]
    pub const fn second(self) -> u32 {
        self.0 % 60
    }

    /// Human-friendly label like `4:30 pm`, see [`ShortTime`].
    pub const fn short(self) -> ShortTime {
        ShortTime(self)
    }
}

/// Sub-second precision is truncated.
impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        Self(time.num_seconds_from_midnight())
    }
}

/// Parse `H[:M[:S]]`, missing trailing components default to zero.
impl FromStr for Time {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let components = text
            .split(':')
            .map(|component| {
                component
                    .trim()
                    .parse::<u32>()
                    .with_context(|| format!("`{component}` is not a number in `{text}`"))
            })
            .collect::<Result<Vec<u32>>>()?;
        let (hour, minute, second) = components
            .into_iter()
            .pad_using(3, |_| 0)
            .collect_tuple()
            .with_context(|| format!("`{text}` has more than three components"))?;
        hour.checked_mul(3600)
            .and_then(|seconds| seconds.checked_add(minute.checked_mul(60)?))
            .and_then(|seconds| seconds.checked_add(second))
            .map(Self::from_seconds)
            .with_context(|| format!("`{text}` does not fit into a day counter"))
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

impl Debug for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Shortest 12-hour label of a [`Time`].
///
/// Trailing zero components are dropped right-to-left, so `12:00:00` becomes `12 pm`
/// and `16:30:00` becomes `4:30 pm`. Exact midnight is `12 am`.
///
/// Lossy: this is a display formatter, not a serializer.
#[derive(Copy, Clone)]
#[must_use]
pub struct ShortTime(pub Time);

impl Display for ShortTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 == Time::MIDNIGHT {
            return f.write_str("12 am");
        }

        let (hour, minute, second) = (self.0.hour(), self.0.minute(), self.0.second());
        let n_components = if second != 0 {
            3
        } else if minute != 0 {
            2
        } else {
            1
        };

        // Hour 24 is «am»:
        let suffix = if hour >= 12 && hour != 24 { "pm" } else { "am" };
        let display_hour = match hour {
            0 => 12,
            13.. => hour - 12,
            _ => hour,
        };

        write!(f, "{display_hour}")?;
        for component in [minute, second].into_iter().take(n_components - 1) {
            write!(f, ":{component:02}")?;
        }
        write!(f, " {suffix}")
    }
}

impl Debug for ShortTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
