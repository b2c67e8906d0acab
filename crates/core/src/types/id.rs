//! Product identifiers.
//!
//! Catalog entries are keyed by an opaque string that stays stable for the
//! lifetime of the catalog. Wrapping it keeps product IDs from being mixed up
//! with titles, tags, or any other free-form string.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a catalog product.
///
/// # Example
///
/// ```rust
/// # use brightcart_core::ProductId;
/// let id = ProductId::new("echo-dot");
/// assert_eq!(id.as_str(), "echo-dot");
/// assert_eq!(id, ProductId::from("echo-dot"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the ID and return its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
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

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
