//! Builder pattern for client configuration.
//!
//! Provides a fluent API for configuring and creating [`ApiClient`] instances.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use catsnap_client::ApiClient;
//!
//! # fn example() -> catsnap_client::Result<()> {
//! let client = ApiClient::builder()
//!     .host("catsnap.example.org")
//!     .http_timeout(Duration::from_secs(30))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use crate::error::{Error, Result};

use super::config::ClientConfig;
use super::core::ApiClient;
use super::endpoints::Endpoints;

// ============================================================================
// ClientBuilder
// ============================================================================

/// Builder for configuring an [`ApiClient`] instance.
///
/// Use [`ApiClient::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct ClientBuilder {
    /// Backend host.
    host: Option<String>,
    /// Plain-text transports.
    insecure: bool,
    /// HTTP request timeout.
    http_timeout: Option<Duration>,
    /// Caller-supplied HTTP client.
    http_client: Option<reqwest::Client>,
}

// ============================================================================
// ClientBuilder Implementation
// ============================================================================

impl ClientBuilder {
    /// Creates a new client builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from a [`ClientConfig`].
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            host: Some(config.host),
            insecure: !config.secure,
            http_timeout: config.http_timeout,
            http_client: None,
        }
    }

    /// Sets the backend host.
    ///
    /// # Arguments
    ///
    /// * `host` - Host with optional port, without scheme (e.g. "catsnap.example.org")
    #[inline]
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Uses `http`/`ws` instead of `https`/`wss`.
    ///
    /// Intended for local development backends.
    #[inline]
    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.insecure = true;
        self
    }

    /// Sets a timeout for each HTTP request.
    ///
    /// Does not apply to the alignment socket.
    #[inline]
    #[must_use]
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = Some(timeout);
        self
    }

    /// Reuses an existing [`reqwest::Client`] (shared connection pool).
    ///
    /// The client's own timeout settings take precedence over
    /// [`http_timeout`](Self::http_timeout).
    #[inline]
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the client with validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if host not set or not a bare host
    /// - [`Error::Http`] if the HTTP client cannot be created
    pub fn build(self) -> Result<ApiClient> {
        let config = self.validate_config()?;
        let endpoints = Endpoints::new(&config)?;

        let http = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = config.http_timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(ApiClient::new(http, endpoints))
    }
}

// ============================================================================
// Validation
// ============================================================================

impl ClientBuilder {
    /// Validates the host configuration.
    fn validate_config(&self) -> Result<ClientConfig> {
        let host = self.host.clone().ok_or_else(|| {
            Error::config(
                "Backend host is required. Use .host() to set it.\n\
                 Example: ApiClient::builder().host(\"catsnap.example.org\")",
            )
        })?;

        Ok(ClientConfig {
            host,
            secure: !self.insecure,
            http_timeout: self.http_timeout,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = ClientBuilder::new();
        assert!(builder.host.is_none());
        assert!(!builder.insecure);
        assert!(builder.http_timeout.is_none());
    }

    #[test]
    fn test_host_sets_value() {
        let builder = ClientBuilder::new().host("catsnap.example.org");
        assert_eq!(builder.host.as_deref(), Some("catsnap.example.org"));
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            host: "localhost:9000".into(),
            secure: false,
            http_timeout: Some(Duration::from_secs(2)),
        };
        let builder = ClientBuilder::from_config(config.clone());

        assert_eq!(builder.validate_config().expect("config"), config);
    }

    #[test]
    fn test_build_fails_without_host() {
        let err = ClientBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains("host"));
    }

    #[test]
    fn test_build_fails_with_scheme_in_host() {
        let result = ClientBuilder::new().host("https://catsnap.example.org").build();
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_build_insecure() {
        let client = ClientBuilder::new()
            .host("localhost:8080")
            .insecure()
            .http_timeout(Duration::from_millis(500))
            .build()
            .expect("build");

        assert_eq!(
            client.endpoints().align_socket().as_str(),
            "ws://localhost:8080/ws/api/align"
        );
    }

    #[test]
    fn test_builder_is_clone() {
        let builder = ClientBuilder::new().host("catsnap.example.org");
        let cloned = builder.clone();
        assert_eq!(builder.host, cloned.host);
    }
}
