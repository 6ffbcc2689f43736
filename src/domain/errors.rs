//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected literal so callers can log it; the
/// `Display` text is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not a 10-digit number.
    InvalidPhone(String),

    /// The provided birthday does not parse as DD.MM.YYYY.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must be a 10-digit number."),
            Self::InvalidBirthday(_) => write!(f, "Birthday must be in format DD.MM.YYYY."),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(err.to_string(), "Phone number must be a 10-digit number.");

        let err = ValidationError::InvalidBirthday("2000-01-01".to_string());
        assert_eq!(err.to_string(), "Birthday must be in format DD.MM.YYYY.");
    }
}
