//! Name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's name.
///
/// Names are unconstrained: construction never fails. The wrapper exists so
/// records cannot accidentally mix up names with other strings.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("alice");
/// assert_eq!(name.as_str(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name. Never fails.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
