//! Opaque product identifier.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a product.
///
/// Assigned by the store at creation time and immutable thereafter. The
/// store generates fresh ids from UUID v4, which are collision-free without
/// coordination; the seeded catalog uses short numeric ids (`"1"`..`"6"`).
/// Consumers treat the id as an opaque string either way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from an existing string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, unique id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
