//! Interactive command loop.
//!
//! Reads commands line by line, runs them against a [`CommandHandler`] and
//! writes the replies. Logging goes to stderr, so the output stream carries
//! only prompts and replies.

pub mod handlers;
pub mod messages;
pub mod parser;

pub use handlers::{CommandHandler, Outcome};
pub use parser::{parse_input, Command};

use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

/// Run the loop until `exit`/`close` or end of input.
///
/// `today` is asked for on every command so a session that crosses midnight
/// uses the new date.
pub fn run_loop<R, W, F>(
    handler: &mut CommandHandler,
    input: R,
    mut output: W,
    mut today: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> NaiveDate,
{
    writeln!(output, "{}", messages::WELCOME)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", messages::PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            writeln!(output, "{}", messages::GOODBYE)?;
            break;
        };
        let line = line?;

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        tracing::debug!(?command, args = args.len(), "Executing command");

        match handler.execute(command, &args, today()) {
            Outcome::Reply(text) => writeln!(output, "{}", text)?,
            Outcome::Exit(text) => {
                writeln!(output, "{}", text)?;
                break;
            }
        }
    }

    Ok(())
}

/// Run the loop on stdin/stdout with the local wall-clock date.
pub fn run_stdio(handler: &mut CommandHandler) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(handler, stdin.lock(), stdout.lock(), || Local::now().date_naive())
}
