//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// `\d` would also accept non-ASCII digits.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("date pattern is valid")
});

/// A birthday entered as `DD.MM.YYYY`.
///
/// The input must match the pattern exactly (two-digit day and month,
/// four-digit year) and name a real calendar date. The original text is
/// kept as the canonical form and is what `Display` prints.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("12.03.1990").unwrap();
/// assert_eq!(birthday.as_str(), "12.03.1990");
/// assert!(Birthday::new("30.02.2000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    date: NaiveDate,
    text: String,
}

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input does not match the
    /// pattern or the date does not exist (e.g. `31.04.2001`).
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let invalid = || ValidationError::InvalidDate(raw.to_string());

        let caps = DATE_PATTERN.captures(raw).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

        Ok(Self {
            date,
            text: raw.to_string(),
        })
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// The canonical `DD.MM.YYYY` text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("12.03.1990").unwrap();
        assert_eq!(birthday.date, NaiveDate::from_ymd_opt(1990, 3, 12).unwrap());
        assert_eq!(birthday.day(), 12);
        assert_eq!(birthday.month(), 3);
        assert_eq!(birthday.as_str(), "12.03.1990");
    }

    #[test]
    fn test_date_pattern_compiles() {
        let pattern = Lazy::force(&DATE_PATTERN);
        assert!(pattern.is_match("12.03.1990"));
        assert!(!pattern.is_match("12.3.1990"));
    }

    #[test]
    fn test_birthday_round_trips_text() {
        for text in ["01.01.0001", "29.02.2000", "31.12.9999", "05.07.1970"] {
            assert_eq!(Birthday::new(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("30.02.2000").is_err());
        assert!(Birthday::new("29.02.2001").is_err());
        assert!(Birthday::new("31.04.2001").is_err());
        assert!(Birthday::new("00.01.2001").is_err());
        assert!(Birthday::new("15.13.2001").is_err());
    }

    #[test]
    fn test_birthday_rejects_other_formats() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.3.1990").is_err());
        assert!(Birthday::new("1990-03-12").is_err());
        assert!(Birthday::new("12/03/1990").is_err());
        assert!(Birthday::new("12.03.90").is_err());
        assert!(Birthday::new(" 12.03.1990").is_err());
        assert!(Birthday::new("12.03.1990x").is_err());
    }

    #[test]
    fn test_birthday_error_variant() {
        match Birthday::new("30.02.2000") {
            Err(ValidationError::InvalidDate(raw)) => assert_eq!(raw, "30.02.2000"),
            other => panic!("Expected InvalidDate, got: {:?}", other),
        }
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("12.03.1990").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"12.03.1990\"");

        let parsed: Birthday = serde_json::from_str("\"12.03.1990\"").unwrap();
        assert_eq!(parsed, birthday);

        let invalid: Result<Birthday, _> = serde_json::from_str("\"31.04.2001\"");
        assert!(invalid.is_err());
    }
}
