use std::fmt::{Display, Formatter};

use chrono::{NaiveTime, Timelike};

/// 12-hour wall clock like `4:05 PM`, the colon blinks every other second.
#[derive(Copy, Clone)]
#[must_use]
pub struct ClockFace(pub NaiveTime);

impl Display for ClockFace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let separator = if self.0.second() % 2 == 0 { ':' } else { ' ' };
        write!(
            f,
            "{}{separator}{} {}",
            self.0.format("%-I"),
            self.0.format("%M"),
            self.0.format("%p"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(hour: u32, minute: u32, second: u32) -> String {
        ClockFace(NaiveTime::from_hms_opt(hour, minute, second).unwrap()).to_string()
    }

    #[test]
    fn even_second_ok() {
        assert_eq!(face(16, 5, 0), "4:05 PM");
        assert_eq!(face(0, 30, 10), "12:30 AM");
        assert_eq!(face(12, 0, 58), "12:00 PM");
    }

    #[test]
    fn odd_second_blinks() {
        assert_eq!(face(16, 5, 1), "4 05 PM");
        assert_eq!(face(9, 59, 59), "9 59 AM");
    }
}
