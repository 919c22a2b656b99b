//! Date decomposition.
//!
//! A pure function from a formatted date string to its calendar components.
//! Weekday numbering follows the `%w` convention (0 = Sunday .. 6 = Saturday)
//! and day-of-year the `%j` convention (1-based); both come from the same
//! parsed date so they can never disagree.

use chrono::{Datelike, NaiveDate};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u32,
    /// 1-based ordinal day, 1..=366.
    pub day_of_year: u32,
}

pub fn decompose(value: &str, format: &str) -> Result<DateParts, AppError> {
    let date = NaiveDate::parse_from_str(value.trim(), format).map_err(|_| AppError::DateParse {
        value: value.to_string(),
        format: format.to_string(),
    })?;

    Ok(DateParts {
        date,
        year: date.year(),
        month: date.month(),
        day: date.day(),
        weekday: date.weekday().num_days_from_sunday(),
        day_of_year: date.ordinal(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_is_deterministic() {
        let a = decompose("15.03.2020", "%d.%m.%Y").unwrap();
        let b = decompose("15.03.2020", "%d.%m.%Y").unwrap();
        assert_eq!(a, b);

        assert_eq!(a.year, 2020);
        assert_eq!(a.month, 3);
        assert_eq!(a.day, 15);
        assert_eq!(a.weekday, 0); // Sunday
        assert_eq!(a.day_of_year, 75);
    }

    #[test]
    fn weekday_range_and_leap_day() {
        // 2020-12-31 is the 366th day of a leap year, a Thursday.
        let p = decompose("31.12.2020", "%d.%m.%Y").unwrap();
        assert_eq!(p.day_of_year, 366);
        assert_eq!(p.weekday, 4);
    }

    #[test]
    fn bad_input_is_a_date_parse_error() {
        let err = decompose("2020-03-15", "%d.%m.%Y").unwrap_err();
        assert!(matches!(err, AppError::DateParse { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
