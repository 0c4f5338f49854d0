//! Menu item identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu item name - newtype for type safety.
///
/// Items are only ever created from the historical dataset at startup, so the
/// set of predictable items is fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItem(String);

impl MenuItem {
    /// Create a new `MenuItem` from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the item name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MenuItem {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MenuItem {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for MenuItem {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
