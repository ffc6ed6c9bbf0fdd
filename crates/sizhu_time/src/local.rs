//! Local civil date/time, the engine's canonical birth-instant form.
//!
//! `LocalDateTime` is a wall-clock value in the birth timezone. Timezone
//! resolution happens at the outer boundary; everything below it reads the
//! local clock directly, which is what pillar derivation is defined on.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;

/// A validated local calendar date/time with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl LocalDateTime {
    /// Construct a validated local date/time.
    ///
    /// Rejects impossible calendar dates (Feb 30) and out-of-range clock
    /// fields with `InvalidDateTime`.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDateTime(format!(
                "{year:04}-{month:02}-{day:02} is not a calendar date"
            )));
        }
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(TimeError::InvalidDateTime(format!(
                "{hour:02}:{minute:02}:{second:02} is not a clock time"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of the same calendar date.
    pub const fn at_midnight(self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        // Fields were validated at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .unwrap_or(NaiveDate::MIN)
    }

    /// The calendar date shifted by a signed number of days.
    pub fn shifted_date(&self, days: i64) -> NaiveDate {
        self.date() + chrono::Duration::days(days)
    }

    /// Continuous day number: days from CE plus the clock-time fraction.
    ///
    /// Differences of two day values give signed fractional-day distances,
    /// which is what decade start-age offsets are measured in.
    pub fn day_value(&self) -> f64 {
        let seconds = f64::from(self.hour) * 3600.0
            + f64::from(self.minute) * 60.0
            + f64::from(self.second);
        f64::from(self.date().num_days_from_ce()) + seconds / 86_400.0
    }
}

impl Display for LocalDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let t = LocalDateTime::new(1990, 5, 10, 12, 30, 0).unwrap();
        assert_eq!(t.year, 1990);
        assert_eq!(t.to_string(), "1990-05-10T12:30:00");
    }

    #[test]
    fn impossible_date_rejected() {
        assert!(matches!(
            LocalDateTime::new(2023, 2, 30, 0, 0, 0),
            Err(TimeError::InvalidDateTime(_))
        ));
        assert!(LocalDateTime::new(2023, 13, 1, 0, 0, 0).is_err());
    }

    #[test]
    fn leap_day_accepted_only_in_leap_years() {
        assert!(LocalDateTime::new(2000, 2, 29, 0, 0, 0).is_ok());
        assert!(LocalDateTime::new(1900, 2, 29, 0, 0, 0).is_err());
    }

    #[test]
    fn out_of_range_clock_rejected() {
        assert!(LocalDateTime::new(2023, 1, 1, 24, 0, 0).is_err());
        assert!(LocalDateTime::new(2023, 1, 1, 0, 60, 0).is_err());
        assert!(LocalDateTime::new(2023, 1, 1, 0, 0, 60).is_err());
    }

    #[test]
    fn ordering_follows_time() {
        let a = LocalDateTime::new(1990, 2, 4, 10, 0, 0).unwrap();
        let b = LocalDateTime::new(1990, 2, 4, 11, 0, 0).unwrap();
        let c = LocalDateTime::new(1991, 1, 1, 0, 0, 0).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn day_value_fraction() {
        let midnight = LocalDateTime::new(2000, 1, 1, 0, 0, 0).unwrap();
        let noon = LocalDateTime::new(2000, 1, 1, 12, 0, 0).unwrap();
        let diff = noon.day_value() - midnight.day_value();
        assert!((diff - 0.5).abs() < 1e-9);
    }

    #[test]
    fn day_value_across_days() {
        let a = LocalDateTime::new(2000, 1, 1, 0, 0, 0).unwrap();
        let b = LocalDateTime::new(2000, 1, 4, 0, 0, 0).unwrap();
        assert!((b.day_value() - a.day_value() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn shifted_date_crosses_month() {
        let t = LocalDateTime::new(2023, 1, 31, 23, 30, 0).unwrap();
        let next = t.shifted_date(1);
        assert_eq!((next.year(), next.month(), next.day()), (2023, 2, 1));
    }

    #[test]
    fn at_midnight_zeroes_clock() {
        let t = LocalDateTime::new(1990, 5, 10, 12, 30, 45).unwrap();
        let m = t.at_midnight();
        assert_eq!((m.hour, m.minute, m.second), (0, 0, 0));
        assert_eq!((m.year, m.month, m.day), (1990, 5, 10));
    }
}
