//! Command handlers.
//!
//! Each handler performs one book operation and returns the text to show the
//! user. Failures come back as `CommandError` and are turned into messages in
//! [`CommandHandler::execute`]; no error ends the session.

use super::messages;
use super::parser::Command;
use crate::domain::PhoneNumber;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading.
    Reply(String),
    /// Print the text and stop.
    Exit(String),
}

/// Owns the address book for one session and dispatches commands to it.
#[derive(Debug)]
pub struct CommandHandler {
    book: AddressBook,
    window_days: u32,
}

impl CommandHandler {
    pub fn new(book: AddressBook, window_days: u32) -> Self {
        Self { book, window_days }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run one command. `today` anchors the `birthdays` query.
    pub fn execute(&mut self, command: Command, args: &[String], today: NaiveDate) -> Outcome {
        let result = match command {
            Command::Exit => return Outcome::Exit(messages::GOODBYE.to_string()),
            Command::Hello => Ok(messages::GREETING.to_string()),
            Command::Help => Ok(messages::HELP.to_string()),
            Command::Unknown => Ok(messages::INVALID.to_string()),
            Command::Add => self.add_contact(args),
            Command::Change => self.change_contact(args),
            Command::Phone => self.show_phone(args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday => self.add_birthday(args),
            Command::ShowBirthday => self.show_birthday(args),
            Command::Birthdays => Ok(self.birthdays(today)),
        };

        match result {
            Ok(text) => Outcome::Reply(text),
            Err(err) => {
                tracing::warn!(?command, error = %err, "Command rejected");
                Outcome::Reply(messages::error(&err))
            }
        }
    }

    /// `add <name> <phone>`: create the contact if needed, then add the phone.
    fn add_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone, ..] = args else {
            return Err(CommandError::MissingArguments("name and phone"));
        };

        // Validate first so a bad phone never leaves an empty contact behind.
        let phone = PhoneNumber::new(phone)?;

        if let Some(record) = self.book.find_mut(name) {
            record.push_phone(phone);
            return Ok(messages::CONTACT_UPDATED.to_string());
        }

        let mut record = Record::new(name)?;
        record.push_phone(phone);
        self.book.add_record(record)?;
        Ok(messages::ADD_SUCCESS.to_string())
    }

    /// `change <name> <old phone> <new phone>`
    fn change_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, old_phone, new_phone, ..] = args else {
            return Err(CommandError::MissingArguments("name, old phone, new phone"));
        };

        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
        record.edit_phone(old_phone, new_phone)?;
        Ok(messages::CHANGE_SUCCESS.to_string())
    }

    /// `phone <name>`
    fn show_phone(&self, args: &[String]) -> CommandResult<String> {
        let record = self.require_record(args)?;
        if record.phones().is_empty() {
            return Ok(messages::no_phones(record.name()));
        }
        Ok(messages::phone_list(record))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return messages::ALL_EMPTY.to_string();
        }
        messages::all_contacts(self.book.items().map(|(_, record)| record))
    }

    /// `add-birthday <name> <DD.MM.YYYY>`; the contact must already exist.
    fn add_birthday(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, birthday, ..] = args else {
            return Err(CommandError::MissingArguments(
                "name and birthday (in DD.MM.YYYY format)",
            ));
        };

        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
        record.add_birthday(birthday)?;
        Ok(messages::BIRTHDAY_ADDED.to_string())
    }

    /// `show-birthday <name>`
    fn show_birthday(&self, args: &[String]) -> CommandResult<String> {
        let record = self.require_record(args)?;
        Ok(match record.birthday() {
            Some(birthday) => messages::birthday_found(record.name(), birthday.as_str()),
            None => messages::birthday_not_found(record.name()),
        })
    }

    fn birthdays(&self, today: NaiveDate) -> String {
        let upcoming = self.book.get_upcoming_birthdays(today, self.window_days);
        messages::upcoming_birthdays(&upcoming, self.window_days)
    }

    fn require_record(&self, args: &[String]) -> CommandResult<&Record> {
        let name = args
            .first()
            .ok_or(CommandError::MissingArguments("name"))?;
        self.book
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.clone()))
    }
}
