//! Search request and response bodies for the HTTP endpoints.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::identifiers::QueryId;

use super::record::ResultsQuery;

// ============================================================================
// SearchStartRequest
// ============================================================================

/// Body of `POST /api/search`.
///
/// # Format
///
/// ```json
/// {
///   "database_type": "refseq",
///   "search_type": "isoforms",
///   "iso1": "NP_000001",
///   "iso2": "NP_000002"
/// }
/// ```
///
/// Unset optional fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStartRequest {
    /// Database to search.
    pub database_type: String,

    /// Kind of search to run.
    pub search_type: String,

    /// Free-text query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// First isoform identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso1: Option<String>,

    /// Second isoform identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso2: Option<String>,

    /// Gene identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene: Option<String>,
}

impl SearchStartRequest {
    /// Creates a request with the mandatory fields.
    #[inline]
    #[must_use]
    pub fn new(database_type: impl Into<String>, search_type: impl Into<String>) -> Self {
        Self {
            database_type: database_type.into(),
            search_type: search_type.into(),
            ..Default::default()
        }
    }

    /// Sets the free-text query.
    #[inline]
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the isoform pair.
    #[inline]
    #[must_use]
    pub fn with_isoforms(mut self, iso1: impl Into<String>, iso2: impl Into<String>) -> Self {
        self.iso1 = Some(iso1.into());
        self.iso2 = Some(iso2.into());
        self
    }

    /// Sets the gene identifier.
    #[inline]
    #[must_use]
    pub fn with_gene(mut self, gene: impl Into<String>) -> Self {
        self.gene = Some(gene.into());
        self
    }
}

// ============================================================================
// SearchStartResponse
// ============================================================================

/// Body returned by `POST /api/search`.
///
/// Carries `query_id` on success and `error` when the backend refused the
/// search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchStartResponse {
    /// Identifier of the started search.
    #[serde(default)]
    pub query_id: Option<String>,

    /// Backend error message.
    #[serde(default)]
    pub error: Option<String>,
}

impl SearchStartResponse {
    /// Extracts the query id, turning a backend error into [`Error::Search`].
    ///
    /// # Errors
    ///
    /// - [`Error::Search`] if the response carries `error`
    /// - [`Error::Protocol`] if it carries neither field or an empty id
    pub fn into_query_id(self) -> Result<QueryId> {
        if let Some(error) = self.error {
            return Err(Error::search(error));
        }

        match self.query_id {
            Some(id) => QueryId::new(id),
            None => Err(Error::protocol(
                "search response carries neither `query_id` nor `error`",
            )),
        }
    }
}

// ============================================================================
// ProgressResponse
// ============================================================================

/// Body returned by `GET /api/status/{query_id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressResponse {
    /// Completion percentage, `0.0..=100.0`.
    pub progress: f64,

    /// Description of the current stage.
    pub description: String,
}

impl ProgressResponse {
    /// Percentage at which a search is finished.
    pub const COMPLETE: f64 = 100.0;

    /// Returns `true` once the search has finished and results can be fetched.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= Self::COMPLETE
    }
}

// ============================================================================
// Results
// ============================================================================

/// Body returned by `GET /api/results/{query_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Results {
    /// One block per matched query.
    #[serde(rename = "queryResults")]
    pub query_results: Vec<ResultsQuery>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_omits_unset_fields() {
        let request = SearchStartRequest::new("refseq", "gene").with_gene("BRCA1");
        let json = serde_json::to_value(&request).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "database_type": "refseq",
                "search_type": "gene",
                "gene": "BRCA1"
            })
        );
    }

    #[test]
    fn test_search_request_isoforms() {
        let request = SearchStartRequest::new("refseq", "isoforms")
            .with_isoforms("NP_1", "NP_2")
            .with_query("kinase");
        let json = serde_json::to_string(&request).expect("serialize");

        assert!(json.contains(r#""iso1":"NP_1""#));
        assert!(json.contains(r#""iso2":"NP_2""#));
        assert!(json.contains(r#""query":"kinase""#));
        assert!(!json.contains("gene"));
    }

    #[test]
    fn test_search_response_success() {
        let response: SearchStartResponse =
            serde_json::from_str(r#"{"query_id":"abc-123"}"#).expect("parse");
        let id = response.into_query_id().expect("query id");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_search_response_error() {
        let response: SearchStartResponse =
            serde_json::from_str(r#"{"error":"unknown gene"}"#).expect("parse");
        let err = response.into_query_id().unwrap_err();
        assert_eq!(err.to_string(), "Search failed: unknown gene");
    }

    #[test]
    fn test_search_response_empty() {
        let response: SearchStartResponse = serde_json::from_str("{}").expect("parse");
        let err = response.into_query_id().unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_progress_response() {
        let response: ProgressResponse =
            serde_json::from_str(r#"{"progress":25.0,"description":"Searching"}"#)
                .expect("parse");
        assert_eq!(response.progress, 25.0);
        assert!(!response.is_complete());
        assert_eq!(response.description, "Searching");
    }

    #[test]
    fn test_progress_complete_at_hundred_percent() {
        let progress = |value: f64| ProgressResponse {
            progress: value,
            description: String::new(),
        };

        assert!(!progress(0.0).is_complete());
        assert!(!progress(1.0).is_complete());
        assert!(!progress(99.9).is_complete());
        assert!(progress(100.0).is_complete());
    }

    #[test]
    fn test_results_camel_case_field() {
        let json = r#"{
            "queryResults": [
                {"query": "Q1", "items": [{"name": "a", "sequence": "ACGT"}]},
                {"query": "Q2", "items": []}
            ]
        }"#;

        let results: Results = serde_json::from_str(json).expect("parse");
        assert_eq!(results.query_results.len(), 2);
        assert_eq!(results.query_results[0].items[0].name, "a");
        assert!(results.query_results[1].is_empty());
    }
}
