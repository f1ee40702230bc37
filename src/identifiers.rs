//! Type-safe identifiers.
//!
//! Newtype wrappers prevent passing arbitrary strings where a
//! server-assigned identifier is expected.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// QueryId
// ============================================================================

/// Server-assigned identifier of a running or finished search.
///
/// Returned by [`crate::ApiClient::search_start`] and used to poll
/// progress, fetch results and build the archive URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(String);

impl QueryId {
    /// Creates a query ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] if the identifier is empty.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::protocol("Query id must not be empty"));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_id_new() {
        let id = QueryId::new("q-42").expect("valid id");
        assert_eq!(id.as_str(), "q-42");
        assert_eq!(id.to_string(), "q-42");
    }

    #[test]
    fn test_query_id_rejects_empty() {
        assert!(QueryId::new("").is_err());
        assert!(QueryId::new("   ").is_err());
    }

    #[test]
    fn test_query_id_serializes_as_string() {
        let id = QueryId::new("abc").expect("valid id");
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "\"abc\"");
    }
}
