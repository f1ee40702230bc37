//! Wire message types.
//!
//! This module defines the JSON bodies exchanged with the CatSnap backend.
//!
//! # Protocol Overview
//!
//! | Message | Direction | Transport | Purpose |
//! |---------|-----------|-----------|---------|
//! | [`AlignmentJob`] | Local → Remote | WebSocket | Job submission (sent once) |
//! | [`ChannelEnvelope`] | Remote → Local | WebSocket | Progress or terminal result |
//! | [`SearchStartRequest`] | Local → Remote | HTTP | Start a search |
//! | [`SearchStartResponse`] | Remote → Local | HTTP | Query id or error |
//! | [`ProgressResponse`] | Remote → Local | HTTP | Search progress |
//! | [`Results`] | Remote → Local | HTTP | Search results |
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `envelope` | Validated alignment-channel push |
//! | `record` | `{query, items}` records and progress text |
//! | `search` | HTTP search bodies |

// ============================================================================
// Submodules
// ============================================================================

/// Alignment channel envelope.
pub mod envelope;

/// Sequence records.
pub mod record;

/// HTTP search bodies.
pub mod search;

// ============================================================================
// Re-exports
// ============================================================================

pub use envelope::ChannelEnvelope;
pub use record::{AlignmentJob, AlignmentResult, ProgressNotification, ResultsItem, ResultsQuery};
pub use search::{ProgressResponse, Results, SearchStartRequest, SearchStartResponse};
