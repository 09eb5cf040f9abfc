//! Calendar helpers for due-date sequencing.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::LendingError;
use crate::LendingResult;

/// First calendar day of the month after `date`.
///
/// True calendar month increment normalized to day 1, so varying month
/// lengths can neither skip nor duplicate a due month.
pub fn first_of_next_month(date: NaiveDate) -> LendingResult<NaiveDate> {
    let first = date
        .with_day(1)
        .ok_or_else(|| LendingError::DateError(format!("invalid calendar date {date}")))?;
    first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| LendingError::DateError(format!("month arithmetic overflow past {first}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_mid_month_rolls_to_first_of_next() {
        assert_eq!(first_of_next_month(d(2024, 3, 15)).unwrap(), d(2024, 4, 1));
    }

    #[test]
    fn test_first_of_month_still_advances() {
        assert_eq!(first_of_next_month(d(2024, 3, 1)).unwrap(), d(2024, 4, 1));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        assert_eq!(first_of_next_month(d(2024, 12, 31)).unwrap(), d(2025, 1, 1));
    }

    #[test]
    fn test_month_lengths_do_not_skip_february() {
        // Jan 31 + "31 days then truncate" would land in March; the calendar
        // increment must not.
        assert_eq!(first_of_next_month(d(2025, 1, 31)).unwrap(), d(2025, 2, 1));
    }

    #[test]
    fn test_leap_february() {
        assert_eq!(first_of_next_month(d(2024, 2, 29)).unwrap(), d(2024, 3, 1));
    }
}
