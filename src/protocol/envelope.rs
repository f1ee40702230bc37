//! Alignment channel envelope.
//!
//! Every message the server pushes on the alignment socket is a JSON object
//! carrying exactly one of two fields:
//!
//! | Field | Meaning | Terminal |
//! |-------|---------|----------|
//! | `progress` | status text | no, may repeat |
//! | `result` | aligned `{query, items}` record | yes, exactly once |
//!
//! There is no explicit discriminant on the wire, so [`ChannelEnvelope::parse`]
//! validates field presence and rejects envelopes with neither or both.

// ============================================================================
// Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

use super::record::{AlignmentResult, ProgressNotification};

// ============================================================================
// RawEnvelope
// ============================================================================

/// Wire shape before field-presence validation.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    progress: Option<String>,

    #[serde(default)]
    result: Option<Value>,
}

// ============================================================================
// ChannelEnvelope
// ============================================================================

/// A validated server push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEnvelope {
    /// Intermediate status. The exchange continues.
    Progress(ProgressNotification),

    /// Final aligned record. The exchange ends.
    Result(AlignmentResult),
}

impl ChannelEnvelope {
    /// Parses and validates one inbound text frame.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedEnvelope`] if the text is not a JSON object with a
    ///   string `progress` or a `result`, or if both fields are present
    /// - [`Error::InvalidResult`] if `result` is present but is not a
    ///   `{query, items}` record
    pub fn parse(text: &str) -> Result<Self> {
        let raw: RawEnvelope = serde_json::from_str(text)
            .map_err(|e| Error::malformed_envelope(format!("{e}")))?;

        match (raw.progress, raw.result) {
            (Some(progress), None) => Ok(Self::Progress(ProgressNotification::new(progress))),
            (None, Some(result)) => serde_json::from_value::<AlignmentResult>(result)
                .map(Self::Result)
                .map_err(|e| Error::invalid_result(e.to_string())),
            (Some(_), Some(_)) => Err(Error::malformed_envelope(
                "envelope carries both `progress` and `result`",
            )),
            (None, None) => Err(Error::malformed_envelope(
                "envelope carries neither `progress` nor `result`",
            )),
        }
    }

    /// Returns `true` if this envelope ends the exchange.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Result(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_progress() {
        let envelope = ChannelEnvelope::parse(r#"{"progress":"10%"}"#).expect("parse");
        assert_eq!(envelope, ChannelEnvelope::Progress(ProgressNotification::new("10%")));
        assert!(!envelope.is_terminal());
    }

    #[test]
    fn test_parse_result() {
        let json = r#"{"result":{"query":"Q1","items":[{"name":"a","sequence":"AC-GT"}]}}"#;
        let envelope = ChannelEnvelope::parse(json).expect("parse");

        match envelope {
            ChannelEnvelope::Result(ref result) => {
                assert_eq!(result.query, "Q1");
                assert_eq!(result.items[0].sequence, "AC-GT");
            }
            ref other => panic!("Expected Result, got {other:?}"),
        }
        assert!(envelope.is_terminal());
    }

    #[test]
    fn test_parse_empty_object_is_malformed() {
        let err = ChannelEnvelope::parse("{}").unwrap_err();
        assert!(matches!(err, Error::MalformedEnvelope { .. }));
    }

    #[test]
    fn test_parse_null_result_is_malformed() {
        let err = ChannelEnvelope::parse(r#"{"result":null}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedEnvelope { .. }));
    }

    #[test]
    fn test_parse_both_fields_is_malformed() {
        let json = r#"{"progress":"99%","result":{"query":"Q","items":[]}}"#;
        let err = ChannelEnvelope::parse(json).unwrap_err();
        assert!(matches!(err, Error::MalformedEnvelope { .. }));
    }

    #[test]
    fn test_parse_invalid_json_is_malformed() {
        let err = ChannelEnvelope::parse("not json at all").unwrap_err();
        assert!(matches!(err, Error::MalformedEnvelope { .. }));
    }

    #[test]
    fn test_parse_non_string_progress_is_malformed() {
        let err = ChannelEnvelope::parse(r#"{"progress":42}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedEnvelope { .. }));
    }

    #[test]
    fn test_parse_misshapen_result_is_invalid_result() {
        let err = ChannelEnvelope::parse(r#"{"result":{"query":"Q"}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidResult { .. }));

        let err = ChannelEnvelope::parse(r#"{"result":"done"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidResult { .. }));
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let envelope =
            ChannelEnvelope::parse(r#"{"progress":"50%","eta":12}"#).expect("parse");
        assert!(matches!(envelope, ChannelEnvelope::Progress(_)));
    }
}
