//! WebSocket transport layer.
//!
//! This module handles the long-running alignment exchange between the
//! local end (Rust) and the CatSnap backend.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐                          ┌─────────────────┐
//! │ AlignmentJobChannel  │   job (once)             │  CatSnap        │
//! │                      │─────────────────────────►│  /ws/api/align  │
//! │  progress_rx ◄───────│◄──── {progress} * n ─────│                 │
//! │  result_rx   ◄───────│◄──── {result}  once ─────│                 │
//! └──────────────────────┘                          └─────────────────┘
//! ```
//!
//! # Connection Lifecycle
//!
//! 1. `AlignmentJobChannel::open` - Handshake, then send the job
//! 2. Event loop forwards progress notifications
//! 3. First result ends the loop and the client closes the socket
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `channel` | Alignment job channel and event loop |

// ============================================================================
// Submodules
// ============================================================================

/// Alignment job channel and event loop.
pub mod channel;

#[cfg(test)]
pub(crate) mod mock;

// ============================================================================
// Re-exports
// ============================================================================

pub use channel::{AlignmentJobChannel, ChannelState};
