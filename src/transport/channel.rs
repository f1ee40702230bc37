//! Alignment job channel.
//!
//! One [`AlignmentJobChannel`] drives one alignment job end to end over its
//! own WebSocket connection:
//!
//! ```text
//!  Connecting ──handshake──► Open ──result──► Closed (success)
//!      │                      │ ▲
//!      │                      └─┘ progress
//!      └──── error / peer close ──────────► Closed (failure)
//! ```
//!
//! The job is the first and only client-originated frame. Progress
//! notifications are forwarded in arrival order; the first result ends the
//! exchange and the client closes the socket. A channel is never reused:
//! open a fresh one per job.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::to_string;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, error, info, trace, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::protocol::{AlignmentJob, AlignmentResult, ChannelEnvelope, ProgressNotification};

// ============================================================================
// Types
// ============================================================================

/// Client WebSocket stream (plain or TLS).
type ClientStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Terminal outcome of an exchange.
type Outcome = Result<AlignmentResult>;

/// How the event loop leaves the socket once the exchange ends.
#[derive(Debug, Clone, Copy)]
enum Teardown {
    /// Initiate the closing handshake.
    Close,
    /// Peer initiated; send the queued close reply.
    FlushReply,
    /// Transport is gone.
    Drop,
}

// ============================================================================
// ChannelState
// ============================================================================

/// Lifecycle state of an [`AlignmentJobChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// Handshake in progress.
    Connecting,
    /// Job sent, awaiting server pushes.
    Open,
    /// Terminal. No further frames are sent or dispatched.
    Closed,
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Connecting => "connecting",
            Self::Open => "open",
            Self::Closed => "closed",
        };
        f.write_str(s)
    }
}

// ============================================================================
// AlignmentJobChannel
// ============================================================================

/// Single-use channel carrying one alignment job.
///
/// Progress is read with [`next_progress`](Self::next_progress); the terminal
/// result with [`result`](Self::result). [`run`](Self::run) combines both,
/// calling a closure for each progress notification.
///
/// # Example
///
/// ```ignore
/// use catsnap_client::{AlignmentJob, AlignmentJobChannel};
///
/// let job = AlignmentJob::new("Q1").with_item("a", "ACGT");
/// let channel = AlignmentJobChannel::open(&endpoint, &job).await?;
///
/// let aligned = channel
///     .run(|progress| println!("progress: {progress}"))
///     .await?;
/// ```
pub struct AlignmentJobChannel {
    /// Progress notifications in arrival order.
    progress_rx: mpsc::UnboundedReceiver<ProgressNotification>,
    /// Terminal outcome, sent once by the event loop.
    result_rx: oneshot::Receiver<Outcome>,
    /// Lifecycle state (shared with event loop).
    state: Arc<Mutex<ChannelState>>,
}

impl fmt::Debug for AlignmentJobChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignmentJobChannel")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl AlignmentJobChannel {
    /// Connects to `endpoint` and submits `job`.
    ///
    /// Returns once the handshake succeeded and the job frame was written.
    /// A background task then consumes server pushes until the exchange
    /// terminates.
    ///
    /// # Errors
    ///
    /// - [`Error::Connection`] if the handshake fails
    /// - [`Error::WebSocket`] if the job frame cannot be written
    /// - [`Error::Json`] if the job cannot be serialized
    pub async fn open(endpoint: &Url, job: &AlignmentJob) -> Result<Self> {
        let state = Arc::new(Mutex::new(ChannelState::Connecting));
        debug!(%endpoint, state = %ChannelState::Connecting, "Opening alignment channel");

        let payload = to_string(job)?;

        let (mut ws_stream, _response) = connect_async(endpoint.as_str()).await.map_err(|e| {
            *state.lock() = ChannelState::Closed;
            Error::connection(format!("Failed to connect to {endpoint}: {e}"))
        })?;

        *state.lock() = ChannelState::Open;
        info!(%endpoint, items = job.items.len(), "Alignment channel open");

        if let Err(e) = ws_stream.send(Message::Text(payload.into())).await {
            *state.lock() = ChannelState::Closed;
            error!(error = %e, "Failed to submit alignment job");
            return Err(Error::WebSocket(e));
        }

        trace!(query = %job.query, "Alignment job sent");

        let (progress_tx, progress_rx) = mpsc::unbounded_channel();
        let (result_tx, result_rx) = oneshot::channel();

        tokio::spawn(Self::run_event_loop(
            ws_stream,
            progress_tx,
            result_tx,
            Arc::clone(&state),
        ));

        Ok(Self {
            progress_rx,
            result_rx,
            state,
        })
    }

    /// Returns the current lifecycle state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> ChannelState {
        *self.state.lock()
    }

    /// Returns `true` once the exchange has terminated.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state() == ChannelState::Closed
    }

    /// Waits for the next progress notification.
    ///
    /// Returns `None` once the exchange has terminated and every buffered
    /// notification has been read.
    pub async fn next_progress(&mut self) -> Option<ProgressNotification> {
        self.progress_rx.recv().await
    }

    /// Waits for the terminal result, discarding unread progress.
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectionClosed`] if the peer closed before a result
    /// - [`Error::WebSocket`] on transport failure
    /// - [`Error::MalformedEnvelope`] or [`Error::InvalidResult`] if the
    ///   server sent something undecodable
    pub async fn result(self) -> Result<AlignmentResult> {
        self.result_rx.await?
    }

    /// Calls `on_progress` for every notification, then returns the result.
    ///
    /// Every notification is delivered before the result is returned.
    ///
    /// # Errors
    ///
    /// Same as [`result`](Self::result).
    pub async fn run<F>(mut self, mut on_progress: F) -> Result<AlignmentResult>
    where
        F: FnMut(ProgressNotification),
    {
        while let Some(progress) = self.progress_rx.recv().await {
            on_progress(progress);
        }
        self.result().await
    }

    /// Event loop that consumes server pushes until the exchange ends.
    async fn run_event_loop(
        mut ws_stream: ClientStream,
        progress_tx: mpsc::UnboundedSender<ProgressNotification>,
        result_tx: oneshot::Sender<Outcome>,
        state: Arc<Mutex<ChannelState>>,
    ) {
        let (outcome, teardown) = loop {
            let parsed = match ws_stream.next().await {
                Some(Ok(Message::Text(text))) => Self::handle_incoming_message(&text),

                Some(Ok(Message::Binary(data))) => match std::str::from_utf8(&data) {
                    Ok(text) => Self::handle_incoming_message(text),
                    Err(e) => {
                        warn!(error = %e, len = data.len(), "Binary alignment frame is not UTF-8");
                        Err(Error::malformed_envelope(format!(
                            "binary frame is not UTF-8: {e}"
                        )))
                    }
                },

                Some(Ok(Message::Close(frame))) => {
                    debug!(?frame, "Alignment channel closed by remote before result");
                    break (Err(Error::ConnectionClosed), Teardown::FlushReply);
                }

                Some(Err(e)) => {
                    error!(error = %e, "Alignment channel WebSocket error");
                    break (Err(Error::WebSocket(e)), Teardown::Drop);
                }

                None => {
                    debug!("Alignment channel stream ended before result");
                    break (Err(Error::ConnectionClosed), Teardown::Drop);
                }

                // Ping/Pong handled by tungstenite
                Some(Ok(_)) => continue,
            };

            match parsed {
                Ok(ChannelEnvelope::Progress(progress)) => {
                    trace!(progress = %progress, "Progress received");
                    // Receiver may be gone; the exchange still runs to its result.
                    let _ = progress_tx.send(progress);
                }
                Ok(ChannelEnvelope::Result(result)) => {
                    debug!(items = result.items.len(), "Alignment result received");
                    break (Ok(result), Teardown::Close);
                }
                Err(e) => break (Err(e), Teardown::Close),
            }
        };

        match teardown {
            Teardown::Close => {
                if let Err(e) = ws_stream.close(None).await {
                    debug!(error = %e, "Failed to close alignment channel cleanly");
                }
            }
            // tungstenite queued the close reply on read; push it out.
            Teardown::FlushReply => {
                if let Err(e) = ws_stream.flush().await {
                    debug!(error = %e, "Failed to send close reply");
                }
            }
            Teardown::Drop => {}
        }
        drop(ws_stream);

        *state.lock() = ChannelState::Closed;
        drop(progress_tx);

        if result_tx.send(outcome).is_err() {
            trace!("Alignment result dropped, channel handle gone");
        }

        debug!(state = %ChannelState::Closed, "Alignment channel terminated");
    }

    /// Parses one inbound frame, logging undecodable ones.
    fn handle_incoming_message(text: &str) -> Result<ChannelEnvelope> {
        ChannelEnvelope::parse(text).inspect_err(|e| {
            warn!(error = %e, text = %text, "Failed to parse alignment envelope");
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
