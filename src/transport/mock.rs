//! Scripted in-process alignment backend for tests.
//!
//! Binds a WebSocket server to `127.0.0.1:0`, accepts one client, records the
//! frames it sends and replays a fixed script of server frames.

// ============================================================================
// Imports
// ============================================================================

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use url::Url;

// ============================================================================
// ServerFrame
// ============================================================================

/// One scripted server action.
#[derive(Debug, Clone)]
pub(crate) enum ServerFrame {
    /// Push a text frame.
    Text(String),
    /// Push a binary frame.
    Binary(Vec<u8>),
    /// Initiate the closing handshake.
    Close,
    /// Drop the TCP connection without a closing handshake.
    Abort,
}

impl ServerFrame {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub(crate) fn binary(data: impl Into<Vec<u8>>) -> Self {
        Self::Binary(data.into())
    }
}

// ============================================================================
// Transcript
// ============================================================================

/// What the backend observed from the client.
#[derive(Debug, Default)]
pub(crate) struct Transcript {
    /// Text frames received, in order.
    pub received: Vec<String>,
    /// Whether the client sent a close frame.
    pub client_closed: bool,
}

// ============================================================================
// MockBackend
// ============================================================================

pub(crate) struct MockBackend {
    listener: TcpListener,
    port: u16,
}

impl MockBackend {
    /// Binds to a random localhost port.
    pub(crate) async fn bind() -> Self {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);
        let listener = TcpListener::bind(addr).await.expect("bind should succeed");
        let port = listener.local_addr().expect("local addr").port();
        Self { listener, port }
    }

    /// Alignment endpoint URL served by this backend.
    pub(crate) fn ws_url(&self) -> Url {
        Url::parse(&format!("ws://127.0.0.1:{}/ws/api/align", self.port)).expect("valid url")
    }

    /// Returns a URL on a port nothing listens on.
    pub(crate) async fn unused_ws_url() -> Url {
        let backend = Self::bind().await;
        let url = backend.ws_url();
        drop(backend);
        url
    }

    /// Accepts one client, waits for its job, then plays `script`.
    pub(crate) fn serve(self, script: Vec<ServerFrame>) -> JoinHandle<Transcript> {
        tokio::spawn(async move {
            let mut transcript = Transcript::default();

            let (stream, _) = self.listener.accept().await.expect("accept");
            let mut ws = tokio_tungstenite::accept_async(stream)
                .await
                .expect("websocket upgrade");

            // Job frame
            if let Some(Ok(Message::Text(text))) = ws.next().await {
                transcript.received.push(text.as_str().to_string());
            }

            for frame in script {
                let sent = match frame {
                    ServerFrame::Text(text) => ws.send(Message::Text(text.into())).await,
                    ServerFrame::Binary(data) => ws.send(Message::Binary(data.into())).await,
                    ServerFrame::Close => ws.close(None).await,
                    ServerFrame::Abort => return transcript,
                };
                if sent.is_err() {
                    break;
                }
            }

            while let Some(message) = ws.next().await {
                match message {
                    Ok(Message::Text(text)) => transcript.received.push(text.as_str().to_string()),
                    Ok(Message::Close(_)) => transcript.client_closed = true,
                    Ok(_) => {}
                    Err(_) => break,
                }
            }

            transcript
        })
    }
}
