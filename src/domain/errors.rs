//! Domain validation errors.

use std::fmt;

/// Errors that can occur while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty (or only whitespace).
    EmptyName,

    /// The phone number does not normalize to exactly ten digits.
    InvalidPhone(String),

    /// The date is not a real calendar date in `DD.MM.YYYY` form.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected 10 digits)", phone)
            }
            Self::InvalidDate(date) => {
                write!(f, "Invalid date: {} (expected DD.MM.YYYY)", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");
        assert!(ValidationError::InvalidPhone("12".into())
            .to_string()
            .contains("12"));
        assert!(ValidationError::InvalidDate("30.02.2000".into())
            .to_string()
            .contains("DD.MM.YYYY"));
    }
}
