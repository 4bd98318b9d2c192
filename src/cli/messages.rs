//! User-facing text for the interactive loop.

use crate::calendar;
use crate::error::{CommandError, ContactBookError};
use crate::models::{Record, UpcomingBirthday};

pub const WELCOME: &str = "Welcome to the assistant bot! Type 'help' to see available commands.";
pub const PROMPT: &str = "Enter a command: ";
pub const GOODBYE: &str = "Good bye!";
pub const GREETING: &str = "How can I help you?";
pub const INVALID: &str = "Invalid command. Type 'help' to see available commands.";

pub const ADD_SUCCESS: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const CHANGE_SUCCESS: &str = "Contact changed.";
pub const BIRTHDAY_ADDED: &str = "Birthday added.";
pub const ALL_EMPTY: &str = "No contacts saved yet.";
pub const ALL_HEADER: &str = "All contacts:";

pub const HELP: &str = "\
Available commands:
  hello                                  Greet the bot
  add <name> <phone>                     Add a contact or a phone to an existing one
  change <name> <old phone> <new phone>  Replace a contact's phone
  phone <name>                           Show a contact's phones
  all                                    Show all contacts
  add-birthday <name> <DD.MM.YYYY>       Set a contact's birthday
  show-birthday <name>                   Show a contact's birthday
  birthdays                              Show upcoming birthdays
  help, -h                               Show this help
  close, exit                            Quit";

pub fn no_phones(name: &str) -> String {
    format!("No phone numbers found for {}.", name)
}

pub fn phone_list(record: &Record) -> String {
    let mut lines = vec![format!("{}'s phone numbers:", record.name())];
    lines.extend(record.phones().iter().map(|p| format!(" - {}", p)));
    lines.join("\n")
}

pub fn all_contacts<'a>(records: impl Iterator<Item = &'a Record>) -> String {
    let mut lines = vec![ALL_HEADER.to_string()];
    lines.extend(records.map(|r| format!(" - {}", r)));
    lines.join("\n")
}

pub fn birthday_found(name: &str, birthday: &str) -> String {
    format!("{}'s birthday is {}.", name, birthday)
}

pub fn birthday_not_found(name: &str) -> String {
    format!("No birthday set for {}.", name)
}

pub fn upcoming_birthdays(upcoming: &[UpcomingBirthday], window_days: u32) -> String {
    if upcoming.is_empty() {
        return format!("No birthdays in the next {} days.", window_days);
    }

    let mut lines = vec![format!("Upcoming birthdays in the next {} days:", window_days)];
    lines.extend(upcoming.iter().map(|u| {
        format!(
            " - {}: {}",
            u.name,
            calendar::format_date(u.congratulation_date)
        )
    }));
    lines.join("\n")
}

/// Render a command failure for the user.
pub fn error(err: &CommandError) -> String {
    match err {
        CommandError::MissingArguments(_) | CommandError::ContactNotFound(_) => err.to_string(),
        CommandError::Book(ContactBookError::Validation(inner)) => {
            format!("Invalid input: {}", inner)
        }
        CommandError::Book(inner) => format!("Error: {}", inner),
    }
}
