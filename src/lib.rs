//! CatSnap client - async bindings for a sequence search and alignment service.
//!
//! This library talks to a remote CatSnap backend over HTTP and WebSocket,
//! translating typed records to and from JSON.
//!
//! # Architecture
//!
//! - **HTTP**: plain request/response calls (start a search, poll its
//!   progress, fetch results, align in one request)
//! - **WebSocket**: the long-running alignment exchange. One connection per
//!   job: the job goes out once, progress notifications stream back, and a
//!   single result ends the exchange
//!
//! # Quick Start
//!
//! ```no_run
//! use catsnap_client::{AlignmentJob, ApiClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::builder()
//!         .host("catsnap.example.org")
//!         .build()?;
//!
//!     let job = AlignmentJob::new("Q1")
//!         .with_item("iso1", "MDLSALRVEE")
//!         .with_item("iso2", "MDLSALEE");
//!
//!     let aligned = client
//!         .align_socket(&job)
//!         .await?
//!         .run(|progress| println!("progress: {progress}"))
//!         .await?;
//!
//!     for item in &aligned.items {
//!         println!("{}\t{}", item.name, item.sequence);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`ApiClient`], builder, configuration, endpoints |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | Wire message types |
//! | [`transport`] | Alignment WebSocket channel |

// ============================================================================
// Modules
// ============================================================================

/// HTTP client, configuration and endpoint construction.
///
/// Use [`ApiClient::builder()`] to create a configured client.
pub mod client;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers.
pub mod identifiers;

/// Wire message types.
///
/// Records, search bodies and the alignment channel envelope.
pub mod protocol;

/// WebSocket transport layer.
///
/// The single-use [`AlignmentJobChannel`].
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Client types
pub use client::{ApiClient, ClientBuilder, ClientConfig, Endpoints};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::QueryId;

// Protocol types
pub use protocol::{
    AlignmentJob, AlignmentResult, ChannelEnvelope, ProgressNotification, ProgressResponse,
    Results, ResultsItem, ResultsQuery, SearchStartRequest, SearchStartResponse,
};

// Transport types
pub use transport::{AlignmentJobChannel, ChannelState};
