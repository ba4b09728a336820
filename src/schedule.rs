pub mod snapshot;

use std::fmt::{Debug, Formatter};

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::time::Time;

/// Opening hours span.
#[serde_as]
#[derive(Copy, Clone, Eq, PartialEq, Deserialize)]
#[must_use]
pub struct TimeRange {
    /// Inclusive.
    #[serde_as(as = "DisplayFromStr")]
    pub start: Time,

    /// Exclusive.
    #[serde_as(as = "DisplayFromStr")]
    pub end: Time,
}

impl Debug for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl TimeRange {
    pub const fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(self, time: Time) -> bool {
        (self.start <= time) && (time < self.end)
    }
}

/// Opening hours of a single day, empty means closed all day.
///
/// The ranges may come in any order and may overlap.
#[derive(Clone, Debug, Default, Eq, PartialEq, derive_more::From, derive_more::IntoIterator)]
#[must_use]
pub struct Schedule(#[into_iterator(ref)] Vec<TimeRange>);

impl FromIterator<TimeRange> for Schedule {
    fn from_iter<T: IntoIterator<Item = TimeRange>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Schedule {
    pub const CLOSED_ALL_DAY: Self = Self(Vec::new());

    #[must_use]
    pub fn is_open(&self, when: Time) -> bool {
        self.0.iter().any(|range| range.contains(when))
    }

    #[must_use]
    pub fn is_closed_all_day(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn ranges(&self) -> &[TimeRange] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: TimeRange = TimeRange::new(Time::from_hms(9, 0, 0), Time::from_hms(18, 0, 0));

    #[test]
    fn start_is_inclusive() {
        assert!(Schedule::from(vec![RANGE]).is_open(RANGE.start));
    }

    #[test]
    fn end_is_exclusive() {
        assert!(!Schedule::from(vec![RANGE]).is_open(RANGE.end));
    }

    #[test]
    fn before_start_is_closed() {
        let before = Time::from_seconds(RANGE.start.seconds() - 1);
        assert!(!Schedule::from(vec![RANGE]).is_open(before));
    }

    #[test]
    fn every_second_of_range_is_open() {
        let schedule = Schedule::from(vec![RANGE]);
        for seconds in RANGE.start.seconds()..RANGE.end.seconds() {
            assert!(schedule.is_open(Time::from_seconds(seconds)), "{seconds}");
        }
    }

    #[test]
    fn closed_all_day() {
        let schedule = Schedule::CLOSED_ALL_DAY;
        assert!(schedule.is_closed_all_day());
        for seconds in (0..86400).step_by(97) {
            assert!(!schedule.is_open(Time::from_seconds(seconds)));
        }
    }

    #[test]
    fn overlapping_ranges_ok() {
        let schedule = Schedule::from(vec![
            TimeRange::new(Time::from_seconds(0), Time::from_seconds(100)),
            TimeRange::new(Time::from_seconds(50), Time::from_seconds(200)),
        ]);
        assert!(schedule.is_open(Time::from_seconds(75)));
        assert!(schedule.is_open(Time::from_seconds(150)));
        assert!(!schedule.is_open(Time::from_seconds(200)));
    }

    #[test]
    fn unsorted_ranges_ok() {
        let schedule = Schedule::from(vec![
            TimeRange::new(Time::from_hms(18, 0, 0), Time::from_hms(22, 0, 0)),
            TimeRange::new(Time::from_hms(9, 0, 0), Time::from_hms(12, 0, 0)),
        ]);
        assert!(schedule.is_open(Time::from_hms(10, 0, 0)));
        assert!(!schedule.is_open(Time::from_hms(15, 0, 0)));
        assert!(schedule.is_open(Time::from_hms(21, 59, 59)));
    }

    #[test]
    fn inverted_range_never_matches() {
        let schedule = Schedule::from(vec![TimeRange::new(
            Time::from_hms(18, 0, 0),
            Time::from_hms(9, 0, 0),
        )]);
        assert!(!schedule.is_open(Time::from_hms(12, 0, 0)));
        assert!(!schedule.is_open(Time::from_hms(20, 0, 0)));
    }

    #[test]
    fn deserialize_time_range_ok() -> crate::prelude::Result {
        let range: TimeRange = serde_json::from_str(r#"["9:00:00", "18:00:00"]"#)?;
        assert_eq!(range, RANGE);
        Ok(())
    }
}
