//! Client configuration.
//!
//! [`ClientConfig`] holds everything needed to reach one CatSnap deployment.
//! It can be filled in by hand, through [`crate::ClientBuilder`], or read from
//! the environment:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `CATSNAP_HOST` | Backend host, optionally with `:port` | required |
//! | `CATSNAP_INSECURE` | `1`/`true` selects `http`/`ws` | `false` |
//! | `CATSNAP_HTTP_TIMEOUT_MS` | HTTP request timeout | none |

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Environment variable holding the backend host.
pub const ENV_HOST: &str = "CATSNAP_HOST";

/// Environment variable selecting plain-text transports.
pub const ENV_INSECURE: &str = "CATSNAP_INSECURE";

/// Environment variable holding the HTTP timeout in milliseconds.
pub const ENV_HTTP_TIMEOUT_MS: &str = "CATSNAP_HTTP_TIMEOUT_MS";

// ============================================================================
// ClientConfig
// ============================================================================

/// Connection settings for one CatSnap deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend host, e.g. `catsnap.example.org` or `localhost:8080`.
    pub host: String,

    /// Use `https`/`wss` (default) rather than `http`/`ws`.
    pub secure: bool,

    /// Timeout applied to each HTTP request. The alignment socket has none.
    pub http_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a secure configuration for `host`.
    #[inline]
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            secure: true,
            http_timeout: None,
        }
    }

    /// Reads the configuration from `CATSNAP_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `CATSNAP_HOST` is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup(ENV_HOST)
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| Error::config(format!("{ENV_HOST} must be set")))?;

        let secure = match lookup(ENV_INSECURE).as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("false") => true,
            Some("1") | Some("true") => false,
            Some(other) => {
                return Err(Error::config(format!(
                    "{ENV_INSECURE} must be a boolean, got {other:?}"
                )));
            }
        };

        let http_timeout = lookup(ENV_HTTP_TIMEOUT_MS)
            .map(|v| {
                v.trim().parse::<u64>().map(Duration::from_millis).map_err(|_| {
                    Error::config(format!("{ENV_HTTP_TIMEOUT_MS} must be a valid u64, got {v:?}"))
                })
            })
            .transpose()?;

        Ok(Self {
            host: host.trim().to_string(),
            secure,
            http_timeout,
        })
    }

    /// Returns the HTTP scheme.
    #[inline]
    #[must_use]
    pub fn http_scheme(&self) -> &'static str {
        if self.secure { "https" } else { "http" }
    }

    /// Returns the WebSocket scheme.
    #[inline]
    #[must_use]
    pub fn ws_scheme(&self) -> &'static str {
        if self.secure { "wss" } else { "ws" }
    }
}

// ============================================================================
// Tests
// ============================================================================
