//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Contacts live only for the
//! duration of the session.

use anyhow::Result;
use contact_book::cli::{self, CommandHandler};
use contact_book::{AddressBook, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging is not up yet; report on stderr directly.
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr so prompts and replies own stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact book (birthday window: {} days)",
        config.birthday_window_days
    );

    let mut handler = CommandHandler::new(AddressBook::new(), config.birthday_window_days);
    if let Err(e) = cli::run_stdio(&mut handler) {
        error!("I/O error in command loop: {}", e);
        return Err(e.into());
    }

    info!(contacts = handler.book().len(), "Contact book shutdown complete");
    Ok(())
}
