//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Every `Display` string here doubles as the user-facing
//! reply text, so the interpreter can print errors without translation.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating or querying a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A value failed construction-time validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The requested phone number is not on this record
    #[error("Phone number not found.")]
    PhoneNotFound,
}

/// Errors produced while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First token is not a recognized command keyword
    #[error("Invalid command.")]
    Unknown,

    /// Recognized command, wrong number of arguments
    #[error("Invalid command format. Please enter '{usage}'.")]
    Usage { usage: &'static str },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
