//! Domain value objects and types.
//!
//! Phone numbers and birthdays are validated when they are constructed, so a
//! `Record` can never hold a value that failed validation.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
