//! Contact Book - a personal contact directory with birthday reminders.
//!
//! Contacts carry validated phone numbers and an optional birthday; the book
//! answers which birthdays fall within a rolling window, moving weekend
//! greetings to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`PhoneNumber`, `Birthday`)
//! - **models**: `Record` and the owning `AddressBook`
//! - **calendar**: Pure date helpers behind the upcoming-birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Command parsing, handlers and the interactive loop

pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, ContactBookError, ErrorKind};
pub use models::{AddressBook, Record, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
