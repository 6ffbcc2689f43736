//! Contact Book - an interactive, in-memory contact manager.
//!
//! This library implements a single-user contact book driven by a
//! line-oriented command interpreter: contacts with validated phone numbers
//! and birthdays, basic CRUD, and a report of birthdays falling within the
//! next seven days.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: Records and the address book that owns them
//! - **repl**: Command grammar, dispatch, and the prompt loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use models::{AddressBook, Record};
pub use repl::{Command, Interpreter, Response};
