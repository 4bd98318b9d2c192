//! Data models for the contact book.
//!
//! A `Record` holds one contact; the `AddressBook` owns every record and
//! answers lookups and upcoming-birthday queries.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use record::Record;
