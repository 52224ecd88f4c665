//! Food list entries.

use std::fmt;

/// Server-assigned identifier of a food item.
///
/// The identifier is opaque; the client never parses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodItemId(String);

impl FoodItemId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FoodItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FoodItemId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for FoodItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
