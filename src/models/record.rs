//! Record model: one contact's name, phones and birthday.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use crate::error::{ContactBookError, ContactBookResult};
use serde::Serialize;
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction. Phones are kept in insertion order and
/// may repeat; every stored phone has passed `PhoneNumber` validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    ///
    /// Surrounding whitespace is trimmed; the result is the record's identity.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if nothing is left after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> ContactBookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        tracing::debug!(name = %self.name, "Adding phone");
        self.phones.push(phone);
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`, in place.
    ///
    /// Both inputs are compared by their normalized digits. Nothing changes
    /// unless both the lookup and the new value's validation succeed.
    ///
    /// # Errors
    ///
    /// - `ContactBookError::PhoneNotFound` if no phone matches `old_raw`
    /// - `ContactBookError::Validation` if `new_raw` is not a valid phone
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> ContactBookResult<()> {
        let index = self
            .find_phone_index(old_raw)
            .ok_or_else(|| ContactBookError::PhoneNotFound {
                name: self.name.clone(),
                phone: old_raw.to_string(),
            })?;

        let phone = PhoneNumber::new(new_raw)?;
        tracing::debug!(name = %self.name, position = index, "Editing phone");
        self.phones[index] = phone;
        Ok(())
    }

    fn find_phone_index(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.matches(raw))
    }

    /// Set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> ContactBookResult<()> {
        let birthday = Birthday::new(raw)?;
        tracing::debug!(name = %self.name, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
