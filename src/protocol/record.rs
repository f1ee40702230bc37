//! Sequence records exchanged with the backend.
//!
//! The same `{query, items}` shape is used for the job submitted to the
//! alignment endpoint, for the aligned result coming back, and for every
//! query block returned by the results endpoint.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// ResultsItem
// ============================================================================

/// One named sequence.
///
/// # Format
///
/// ```json
/// { "name": "a", "sequence": "ACGT" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsItem {
    /// Sequence name (isoform, gene, accession...).
    pub name: String,

    /// Raw or aligned sequence. Aligned sequences may contain `-` gaps.
    pub sequence: String,
}

impl ResultsItem {
    /// Creates a new item.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

// ============================================================================
// ResultsQuery
// ============================================================================

/// A named query plus an ordered list of sequences.
///
/// # Format
///
/// ```json
/// {
///   "query": "Q1",
///   "items": [{ "name": "a", "sequence": "ACGT" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsQuery {
    /// Query name.
    pub query: String,

    /// Sequences in submission order.
    pub items: Vec<ResultsItem>,
}

/// Job submitted over the alignment channel.
pub type AlignmentJob = ResultsQuery;

/// Aligned output delivered as the terminal message of the channel.
pub type AlignmentResult = ResultsQuery;

impl ResultsQuery {
    /// Creates an empty query.
    #[inline]
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item.
    #[inline]
    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>, sequence: impl Into<String>) -> Self {
        self.items.push(ResultsItem::new(name, sequence));
        self
    }

    /// Appends multiple items.
    #[inline]
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = ResultsItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Returns the item with the given name.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&ResultsItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Returns the number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// ProgressNotification
// ============================================================================

/// Human-readable status pushed by the server while a job runs.
///
/// Superseded by the next notification or by the terminal result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressNotification(String);

impl ProgressNotification {
    /// Creates a notification.
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the status text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the notification and returns the status text.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProgressNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_job_serialization() {
        let job = AlignmentJob::new("Q1").with_item("a", "ACGT");
        let json = serde_json::to_value(&job).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "query": "Q1",
                "items": [{ "name": "a", "sequence": "ACGT" }]
            })
        );
    }

    #[test]
    fn test_empty_items_serialize_as_array() {
        let job = AlignmentJob::new("empty");
        let json = serde_json::to_string(&job).expect("serialize");
        assert_eq!(json, r#"{"query":"empty","items":[]}"#);
    }

    #[test]
    fn test_missing_items_rejected() {
        let result = serde_json::from_str::<ResultsQuery>(r#"{"query":"Q1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_lookup() {
        let query = ResultsQuery::new("Q")
            .with_item("gene", "ATG")
            .with_item("iso1", "A-G");

        assert_eq!(query.len(), 2);
        assert_eq!(query.item("iso1").map(|i| i.sequence.as_str()), Some("A-G"));
        assert!(query.item("iso2").is_none());
    }

    #[test]
    fn test_progress_notification_is_plain_string() {
        let progress = ProgressNotification::new("10%");
        assert_eq!(serde_json::to_string(&progress).expect("serialize"), "\"10%\"");
        assert_eq!(progress.to_string(), "10%");
    }

    fn arb_item() -> impl Strategy<Value = ResultsItem> {
        ("[a-zA-Z0-9_]{0,12}", "[ACGT-]{0,64}").prop_map(|(n, s)| ResultsItem::new(n, s))
    }

    proptest! {
        #[test]
        fn prop_job_round_trip(
            query in ".{0,32}",
            items in proptest::collection::vec(arb_item(), 0..8),
        ) {
            let job = AlignmentJob::new(query).with_items(items);
            let json = serde_json::to_string(&job).expect("serialize");
            let decoded: AlignmentJob = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(decoded, job);
        }
    }
}
