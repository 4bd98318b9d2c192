//! Calendar helpers for the upcoming-birthday query.
//!
//! All functions here are pure: "today" is always passed in.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Place a month/day on the given year.
///
/// 29 February falls back to 28 February in non-leap years.
pub fn on_year(month: u32, day: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// The first date on or after `today` that carries the given month/day.
///
/// A date already past this year wraps to next year, so a 2 January
/// birthday seen from 30 December lands in January of the following year.
pub fn next_occurrence(month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let candidate = on_year(month, day, today.year())?;
    if candidate < today {
        on_year(month, day, today.year() + 1)
    } else {
        Some(candidate)
    }
}

/// Move a weekend date forward to the following Monday.
pub fn shift_weekend(date: NaiveDate) -> NaiveDate {
    let offset = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

/// Format a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}.{:02}.{:04}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_next_occurrence_same_year() {
        assert_eq!(
            next_occurrence(3, 12, date(10, 3, 2024)),
            Some(date(12, 3, 2024))
        );
    }

    #[test]
    fn test_next_occurrence_today() {
        assert_eq!(
            next_occurrence(6, 1, date(1, 6, 2024)),
            Some(date(1, 6, 2024))
        );
    }

    #[test]
    fn test_next_occurrence_wraps_year() {
        assert_eq!(
            next_occurrence(1, 2, date(30, 12, 2024)),
            Some(date(2, 1, 2025))
        );
    }

    #[test]
    fn test_leap_day_in_common_year() {
        assert_eq!(on_year(2, 29, 2023), Some(date(28, 2, 2023)));
        assert_eq!(on_year(2, 29, 2024), Some(date(29, 2, 2024)));
        assert_eq!(on_year(4, 31, 2024), None);
    }

    #[test]
    fn test_shift_weekend() {
        // 16.03.2024 is a Saturday, 17.03.2024 a Sunday.
        assert_eq!(shift_weekend(date(16, 3, 2024)), date(18, 3, 2024));
        assert_eq!(shift_weekend(date(17, 3, 2024)), date(18, 3, 2024));
        assert_eq!(shift_weekend(date(12, 3, 2024)), date(12, 3, 2024));
        assert_eq!(shift_weekend(date(15, 3, 2024)), date(15, 3, 2024));
    }

    #[test]
    fn test_shift_weekend_crosses_year() {
        // 31.12.2022 is a Saturday.
        assert_eq!(shift_weekend(date(31, 12, 2022)), date(2, 1, 2023));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2, 1, 2025)), "02.01.2025");
        assert_eq!(format_date(date(18, 3, 2024)), "18.03.2024");
    }
}
