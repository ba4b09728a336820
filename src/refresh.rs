use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

/// Time left until the next `at`, zero when `now` is exactly `at`.
#[must_use]
pub fn until_next(now: NaiveDateTime, at: NaiveTime) -> TimeDelta {
    let delay = now.date().and_time(at) - now;
    if delay < TimeDelta::zero() { delay + TimeDelta::days(1) } else { delay }
}
