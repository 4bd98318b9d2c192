//! AddressBook: the owning, insertion-ordered collection of records.

use super::record::Record;
use crate::calendar;
use crate::error::{ContactBookError, ContactBookResult};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Default length of the upcoming-birthday window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A birthday that falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Day to send the greeting (weekends moved to Monday)
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&calendar::format_date(*date))
}

/// All contacts, keyed by exact (case-sensitive) name.
///
/// Records live in a vector in insertion order; `index` maps each name to its
/// slot. Records are never removed, so slots stay valid.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns `ContactBookError::DuplicateName` if a record with the same
    /// name is already present; the book is left unchanged.
    pub fn add_record(&mut self, record: Record) -> ContactBookResult<()> {
        if self.index.contains_key(record.name()) {
            return Err(ContactBookError::DuplicateName(record.name().to_string()));
        }

        tracing::debug!(name = %record.name(), "Adding record");
        self.index.insert(record.name().to_string(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Case-sensitive lookup. The name is trimmed the same way
    /// `Record::new` trims it.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name.trim()).map(|&i| &self.records[i])
    }

    /// Lookup for in-place mutation; same matching rules as [`find`](Self::find).
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name.trim()) {
            Some(&i) => self.records.get_mut(i),
            None => None,
        }
    }

    /// Records in insertion order, paired with their names.
    pub fn items(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|r| (r.name(), r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays occurring in `[today, today + window_days)`.
    ///
    /// Each birthday is placed on the current year, or the next one if it has
    /// already passed. Matches that land on a weekend are reported on the
    /// following Monday, even when that Monday is past the window. Results
    /// follow insertion order.
    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let candidate =
                    calendar::next_occurrence(birthday.month(), birthday.day(), today)?;
                let days_until = (candidate - today).num_days();

                if (0..i64::from(window_days)).contains(&days_until) {
                    Some(UpcomingBirthday {
                        name: record.name().to_string(),
                        congratulation_date: calendar::shift_weekend(candidate),
                    })
                } else {
                    None
                }
            })
            .collect();

        tracing::debug!(
            today = %today,
            window_days,
            found = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}
