//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Broad classification of a [`ContactBookError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input (name, phone, date).
    Validation,
    /// A referenced item does not exist.
    Lookup,
    /// The operation would break a uniqueness rule.
    Conflict,
}

/// Errors raised by `Record` and `AddressBook` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactBookError {
    /// Input failed value-object validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to edit is not on the record
    #[error("Phone {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    /// A record with this name already exists
    #[error("Contact already exists: {0}")]
    DuplicateName(String),
}

impl ContactBookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::PhoneNotFound { .. } => ErrorKind::Lookup,
            Self::DuplicateName(_) => ErrorKind::Conflict,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced while executing a user command.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given too few arguments
    #[error("Not enough arguments. Expected: {0}.")]
    MissingArguments(&'static str),

    /// The named contact is not in the book
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] ContactBookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(err.into())
    }
}

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
