//! Contact Book - Main entry point
//!
//! Wires configuration, logging, and the interpreter together, then hands
//! the terminal over to the prompt loop.

use anyhow::Result;
use contact_book::{AddressBook, Config, Interpreter};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr; stdout is the user dialogue.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting contact book session");

    let book = AddressBook::new();
    let mut interpreter = Interpreter::new(book);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = interpreter.run(stdin.lock(), &mut stdout) {
        error!("Session ended with I/O error: {}", e);
        return Err(e.into());
    }

    info!("Session closed with {} contact(s) in the book", interpreter.book().len());
    Ok(())
}
