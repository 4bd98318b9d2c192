//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits a normalized phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// A validated, normalized phone number.
///
/// Construction strips every non-digit character from the input and
/// requires exactly ten ASCII digits to remain. The stored value is the
/// digit string, so two inputs that differ only in formatting compare equal.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(050) 123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from free-form input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input contains
    /// exactly ten digits once formatting is removed.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let digits = Self::normalize(raw);

        if digits.len() != PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(digits))
    }

    /// Strip everything but ASCII digits.
    pub fn normalize(raw: &str) -> String {
        raw.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Whether free-form input denotes this number.
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == Self::normalize(raw)
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
