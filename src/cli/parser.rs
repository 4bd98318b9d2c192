//! Turns a line of user input into a command and its arguments.

use std::str::FromStr;

/// Commands understood by the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
    Unknown,
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "help" | "-h" => Command::Help,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown,
        })
    }
}

/// Split a line into a command and whitespace-separated arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    let command = command.parse::<Command>().unwrap_or(Command::Unknown);
    Some((command, parts.map(str::to_string).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_blank() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   \t "), None);
    }

    #[test]
    fn test_parse_input_command_and_args() {
        let (command, args) = parse_input("  ADD Alice  050-123-4567 ").unwrap();
        assert_eq!(command, Command::Add);
        assert_eq!(args, vec!["Alice", "050-123-4567"]);
    }

    #[test]
    fn test_command_aliases() {
        assert_eq!("close".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!("-h".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("add-birthday".parse::<Command>().unwrap(), Command::AddBirthday);
        assert_eq!("show-birthday".parse::<Command>().unwrap(), Command::ShowBirthday);
        assert_eq!("frobnicate".parse::<Command>().unwrap(), Command::Unknown);
    }
}
