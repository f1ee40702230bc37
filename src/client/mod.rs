//! CatSnap HTTP client module.
//!
//! This module provides the main entry point for talking to a CatSnap
//! deployment.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ApiClient`] | HTTP calls and alignment channel factory |
//! | [`ClientBuilder`] | Fluent configuration builder |
//! | [`ClientConfig`] | Host, transport security and timeouts |
//! | [`Endpoints`] | URL construction |
//!
//! # Example
//!
//! ```no_run
//! use catsnap_client::{ApiClient, ClientConfig, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = ApiClient::builder()
//!     .host("catsnap.example.org")
//!     .build()?;
//!
//! // Or from CATSNAP_* environment variables
//! let client = catsnap_client::ClientBuilder::from_config(ClientConfig::from_env()?).build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder pattern for client configuration.
pub mod builder;

/// Client configuration and environment loading.
pub mod config;

/// Core client implementation.
pub mod core;

/// Endpoint URL construction.
pub mod endpoints;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::ClientBuilder;
pub use config::ClientConfig;
pub use core::ApiClient;
pub use endpoints::Endpoints;
