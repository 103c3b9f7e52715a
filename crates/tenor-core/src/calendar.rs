//! A toy 360-day calendar.
//!
//! Twelve months of thirty days each. Dates are `f64` offsets on the year
//! axis: January 1 of a year is the year itself, so `1976.0` is
//! "January 1, 1976". Month and day are 1-based.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Calendar with 12 months of 30 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimpleCalendar360;

impl SimpleCalendar360 {
    /// Months per year.
    pub const MONTHS_PER_YEAR: u32 = 12;
    /// Days per month.
    pub const DAYS_PER_MONTH: u32 = 30;
    /// Days per year.
    pub const DAYS_PER_YEAR: u32 = Self::MONTHS_PER_YEAR * Self::DAYS_PER_MONTH;

    /// Creates a new calendar.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the year-axis offset of a calendar date.
    ///
    /// ```rust
    /// use tenor_core::calendar::SimpleCalendar360;
    ///
    /// let cal = SimpleCalendar360::new();
    /// assert_eq!(cal.date(2017, 1, 1).unwrap(), 2017.0);
    /// assert_eq!(cal.date(2017, 7, 1).unwrap(), 2017.5);
    /// ```
    pub fn date(&self, year: i32, month: u32, day: u32) -> CoreResult<f64> {
        if !(1..=Self::MONTHS_PER_YEAR).contains(&month) {
            return Err(CoreError::invalid_input(format!(
                "month must be in 1..=12, got {month}"
            )));
        }
        if !(1..=Self::DAYS_PER_MONTH).contains(&day) {
            return Err(CoreError::invalid_input(format!(
                "day must be in 1..=30, got {day}"
            )));
        }
        Ok(f64::from(year)
            + f64::from(month - 1) / f64::from(Self::MONTHS_PER_YEAR)
            + f64::from(day - 1) / f64::from(Self::DAYS_PER_YEAR))
    }

    /// Shifts a date by a number of months (negative moves backwards).
    #[must_use]
    pub fn add_months(&self, date: f64, months: i32) -> f64 {
        date + f64::from(months) / f64::from(Self::MONTHS_PER_YEAR)
    }

    /// Shifts a date by a number of days (negative moves backwards).
    #[must_use]
    pub fn add_days(&self, date: f64, days: i32) -> f64 {
        date + f64::from(days) / f64::from(Self::DAYS_PER_YEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_date_offsets() {
        let cal = SimpleCalendar360::new();
        assert_relative_eq!(cal.date(1976, 1, 1).unwrap(), 1976.0);
        assert_relative_eq!(cal.date(2017, 9, 1).unwrap(), 2017.0 + 8.0 / 12.0);
        assert_relative_eq!(cal.date(2017, 1, 30).unwrap(), 2017.0 + 29.0 / 360.0);
    }

    #[test]
    fn test_invalid_dates() {
        let cal = SimpleCalendar360::new();
        assert!(cal.date(2017, 13, 1).is_err());
        assert!(cal.date(2017, 0, 1).is_err());
        assert!(cal.date(2017, 2, 31).is_err());
    }

    #[test]
    fn test_add_months() {
        let cal = SimpleCalendar360::new();
        let start = cal.date(2017, 9, 1).unwrap();
        let lagged = cal.add_months(start, 3);
        assert_relative_eq!(lagged, cal.date(2017, 12, 1).unwrap(), epsilon = 1e-12);
        assert_relative_eq!(cal.add_months(lagged, -3), start, epsilon = 1e-12);
    }

    #[test]
    fn test_add_days() {
        let cal = SimpleCalendar360::new();
        assert_relative_eq!(cal.add_days(2017.0, 360), 2018.0, epsilon = 1e-12);
    }
}
