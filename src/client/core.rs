//! CatSnap API client.
//!
//! The [`ApiClient`] wraps the plain request/response HTTP endpoints and acts
//! as the factory for alignment channels.
//!
//! # Example
//!
//! ```no_run
//! use catsnap_client::{AlignmentJob, ApiClient, SearchStartRequest};
//!
//! # async fn example() -> catsnap_client::Result<()> {
//! let client = ApiClient::builder().host("catsnap.example.org").build()?;
//!
//! let query_id = client
//!     .search_start(&SearchStartRequest::new("refseq", "gene").with_gene("BRCA1"))
//!     .await?;
//! let progress = client.get_progress(&query_id).await?;
//! println!("{}: {}", progress.progress, progress.description);
//!
//! let job = AlignmentJob::new("BRCA1").with_item("iso1", "MDLSALR");
//! let aligned = client
//!     .align_socket(&job)
//!     .await?
//!     .run(|p| println!("{p}"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use reqwest::header::{ACCEPT, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::identifiers::QueryId;
use crate::protocol::{
    AlignmentJob, ProgressResponse, Results, ResultsQuery, SearchStartRequest,
    SearchStartResponse,
};
use crate::transport::AlignmentJobChannel;

use super::builder::ClientBuilder;
use super::endpoints::Endpoints;

// ============================================================================
// Constants
// ============================================================================

/// JSON media type sent as both `Accept` and `Content-Type`.
const APPLICATION_JSON: &str = "application/json";

/// Permissive cross-origin header attached to every request.
const ALLOW_ANY_ORIGIN: &str = "*";

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for the client.
pub(crate) struct ClientInner {
    /// HTTP connection pool.
    pub http: reqwest::Client,
    /// Endpoint URLs.
    pub endpoints: Endpoints,
}

// ============================================================================
// ApiClient
// ============================================================================

/// Client for one CatSnap deployment.
///
/// Cheap to clone; clones share the HTTP connection pool. Every call to
/// [`align_socket`](Self::align_socket) opens its own WebSocket connection.
#[derive(Clone)]
pub struct ApiClient {
    /// Shared inner state.
    pub(crate) inner: Arc<ClientInner>,
}

// ============================================================================
// ApiClient - Display
// ============================================================================

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoints", &self.inner.endpoints)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// ApiClient - Public API
// ============================================================================

impl ApiClient {
    /// Creates a configuration builder for the client.
    #[inline]
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the endpoint URLs.
    #[inline]
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    /// Starts a search.
    ///
    /// # Errors
    ///
    /// - [`Error::Search`] if the backend rejected the search
    /// - [`Error::Api`] on a non-success status
    /// - [`Error::Http`] on transport or decode failure
    pub async fn search_start(&self, request: &SearchStartRequest) -> Result<QueryId> {
        let url = self.inner.endpoints.search();
        let response: SearchStartResponse = self
            .send_json(self.request(Method::POST, url).json(request))
            .await?;

        let query_id = response.into_query_id().inspect_err(|e| {
            warn!(error = %e, "Search start rejected");
        })?;

        debug!(%query_id, search_type = %request.search_type, "Search started");
        Ok(query_id)
    }

    /// Polls the progress of a search.
    ///
    /// # Errors
    ///
    /// - [`Error::Api`] on a non-success status
    /// - [`Error::Http`] on transport or decode failure
    pub async fn get_progress(&self, query_id: &QueryId) -> Result<ProgressResponse> {
        let url = self.inner.endpoints.status(query_id);
        self.send_json(self.request(Method::GET, url)).await
    }

    /// Fetches the results of a finished search.
    ///
    /// # Errors
    ///
    /// - [`Error::Api`] on a non-success status
    /// - [`Error::Http`] on transport or decode failure
    pub async fn get_results(&self, query_id: &QueryId) -> Result<Results> {
        let url = self.inner.endpoints.results(query_id);
        self.send_json(self.request(Method::GET, url)).await
    }

    /// Aligns a query in a single blocking request.
    ///
    /// Prefer [`align_socket`](Self::align_socket) for long jobs.
    ///
    /// # Errors
    ///
    /// - [`Error::Api`] on a non-success status
    /// - [`Error::Http`] on transport or decode failure
    pub async fn align(&self, query: &ResultsQuery) -> Result<ResultsQuery> {
        let url = self.inner.endpoints.align();
        self.send_json(self.request(Method::POST, url).json(query))
            .await
    }

    /// Opens a fresh alignment channel and submits `job` on it.
    ///
    /// # Errors
    ///
    /// See [`AlignmentJobChannel::open`].
    pub async fn align_socket(&self, job: &AlignmentJob) -> Result<AlignmentJobChannel> {
        AlignmentJobChannel::open(&self.inner.endpoints.align_socket(), job).await
    }

    /// Returns the download URL of the zipped results of a search.
    #[inline]
    #[must_use]
    pub fn results_archive_url(&self, query_id: &QueryId) -> Url {
        self.inner.endpoints.results_archive(query_id)
    }
}

// ============================================================================
// ApiClient - Internal API
// ============================================================================

impl ApiClient {
    /// Creates a new client.
    pub(crate) fn new(http: reqwest::Client, endpoints: Endpoints) -> Self {
        Self {
            inner: Arc::new(ClientInner { http, endpoints }),
        }
    }

    /// Starts a request with the standard JSON headers.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "HTTP request");
        self.inner
            .http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON))
            .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
            .header(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ANY_ORIGIN))
    }

    /// Sends a request and decodes a successful JSON body.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = Self::ensure_success(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Turns a non-success status into [`Error::Api`] carrying the body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let url = response.url().clone();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            warn!(status = status.as_u16(), %url, "HTTP request failed");
            return Err(Error::api(status.as_u16(), body));
        }
        Ok(response)
    }
}

// ============================================================================
// Tests
// ============================================================================
