//! Endpoint URL construction.
//!
//! | Operation | URL |
//! |-----------|-----|
//! | search start | `https://{host}/api/search` |
//! | progress | `https://{host}/api/status/{query_id}` |
//! | results | `https://{host}/api/results/{query_id}` |
//! | align | `https://{host}/api/align/` |
//! | results archive | `https://{host}/api/results_archive/{query_id}` |
//! | alignment socket | `wss://{host}/ws/api/align` |

// ============================================================================
// Imports
// ============================================================================

use url::Url;

use crate::error::{Error, Result};
use crate::identifiers::QueryId;

use super::config::ClientConfig;

// ============================================================================
// Endpoints
// ============================================================================

/// Precomputed base URLs for one deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// `https://{host}/`
    http_base: Url,
    /// `wss://{host}/`
    ws_base: Url,
}

impl Endpoints {
    /// Builds the base URLs from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the host is empty or carries a scheme,
    /// path, query or credentials.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let host = config.host.trim();
        if host.is_empty() {
            return Err(Error::config("Host must not be empty"));
        }
        if host.contains("://") {
            return Err(Error::config(format!(
                "Host must not include a scheme: {host:?}. Use .insecure() for plain http/ws."
            )));
        }

        let http_base = Url::parse(&format!("{}://{host}/", config.http_scheme()))?;
        if http_base.path() != "/"
            || http_base.query().is_some()
            || http_base.fragment().is_some()
            || !http_base.username().is_empty()
        {
            return Err(Error::config(format!(
                "Host must be a bare host with optional port: {host:?}"
            )));
        }

        let ws_base = Url::parse(&format!("{}://{host}/", config.ws_scheme()))?;

        Ok(Self { http_base, ws_base })
    }

    /// `POST` target for starting a search.
    #[must_use]
    pub fn search(&self) -> Url {
        join(&self.http_base, &["api", "search"])
    }

    /// `GET` target for polling search progress.
    #[must_use]
    pub fn status(&self, query_id: &QueryId) -> Url {
        join(&self.http_base, &["api", "status", query_id.as_str()])
    }

    /// `GET` target for fetching search results.
    #[must_use]
    pub fn results(&self, query_id: &QueryId) -> Url {
        join(&self.http_base, &["api", "results", query_id.as_str()])
    }

    /// `POST` target for a non-streaming alignment. Note the trailing slash.
    #[must_use]
    pub fn align(&self) -> Url {
        join(&self.http_base, &["api", "align", ""])
    }

    /// Download link for the zipped results of a search.
    #[must_use]
    pub fn results_archive(&self, query_id: &QueryId) -> Url {
        join(&self.http_base, &["api", "results_archive", query_id.as_str()])
    }

    /// WebSocket target for the streaming alignment exchange.
    #[must_use]
    pub fn align_socket(&self) -> Url {
        join(&self.ws_base, &["ws", "api", "align"])
    }
}

/// Appends percent-encoded path segments to a base URL.
fn join(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

// ============================================================================
// Tests
// ============================================================================
