//! Configuration management for the contact book.
//!
//! This module handles loading configuration from environment variables.
//! All variables are optional and defaulted.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level for the tracing subscriber (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level, one of trace/debug/info/warn/error
    ///   (default: "error")
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> ConfigResult<Self> {
        // Don't fail if there is no .env file
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        if !VALID_LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!(
                    "Must be one of {}, got: {}",
                    VALID_LOG_LEVELS.join("/"),
                    log_level
                ),
            });
        }

        Ok(Config { log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "error".to_string(),
        }
    }
}
