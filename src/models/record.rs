//! Record model representing one contact in the book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use std::fmt;

/// A single contact: one immutable name, an ordered list of phone numbers,
/// and at most one birthday.
///
/// Phone order is insertion order and shows up as-is in the display output.
/// Duplicate phones are allowed; removal and editing act on the first match.
///
/// Every mutation returns a `Result` instead of panicking or printing, so
/// callers decide how to surface failures (see [`crate::repl`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with the given name, no phones, no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name. Set at creation, never changed.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been recorded.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// On validation failure the list is left untouched.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal by value to `raw`.
    ///
    /// An invalid `raw` cannot match any stored phone (all stored phones are
    /// valid), so it reports not-found rather than a validation failure.
    pub fn remove_phone(&mut self, raw: &str) -> RecordResult<()> {
        match self.position_of(raw) {
            Some(idx) => {
                self.phones.remove(idx);
                Ok(())
            }
            None => Err(RecordError::PhoneNotFound),
        }
    }

    /// Replace the first phone equal by value to `old_raw` with a validated
    /// phone built from `new_raw`.
    ///
    /// Both failure modes come back as `Err`: a missing `old_raw` as
    /// `PhoneNotFound`, an invalid `new_raw` as `Validation`. The list is
    /// untouched in either case.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> RecordResult<()> {
        let idx = self.position_of(old_raw).ok_or(RecordError::PhoneNotFound)?;
        let replacement = PhoneNumber::new(new_raw)?;
        self.phones[idx] = replacement;
        Ok(())
    }

    /// Validate `raw` and store it as the birthday, overwriting any prior
    /// one. On validation failure the prior birthday (or absence) stays.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Look up a phone by value. Pure query, no side effect.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.position_of(raw).map(|idx| &self.phones[idx])
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
