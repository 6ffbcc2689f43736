//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for birthdays.
///
/// Birthdays are validated at construction time against the `DD.MM.YYYY`
/// format: zero-padded two-digit day and month, four-digit year, and a real
/// calendar date. The stored value always formats back to the exact input.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("05.06.2000").unwrap();
/// assert_eq!(birthday.to_string(), "05.06.2000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` unless the input matches
    /// `DD.MM.YYYY` and names a valid calendar date.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = birthday.into();

        match Self::parse(&birthday) {
            Some(date) => Ok(Self(date)),
            None => Err(ValidationError::InvalidBirthday(birthday)),
        }
    }

    /// Parse a strict `DD.MM.YYYY` literal.
    ///
    /// The shape check comes first so chrono's lenient field parsing (which
    /// would accept `5.6.2000`) cannot widen the accepted format.
    fn parse(raw: &str) -> Option<NaiveDate> {
        let bytes = raw.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
            return None;
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !digits_ok {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%d.%m.%Y").ok()
    }

    /// Get the birthday as a calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - reproduces the validated input exactly
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}
