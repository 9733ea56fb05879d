//! WebSocket transport backed by tokio-tungstenite.
//!
//! [`WsConnection`] adapts a `WebSocketStream` to the session's
//! [`Connection`] trait. Protocol-level control frames are absorbed here:
//! tungstenite queues the pong reply to an inbound ping itself, so the
//! session layer only ever sees text, binary, close, and error events.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::Message as WsMessage, MaybeTlsStream, WebSocketStream,
};
use tracing::debug;

use crate::application::localize::VpsClient;
use crate::application::transport::{Connection, Connector, TransportEvent};
use crate::domain::config::SessionConfig;
use crate::domain::error::TransportError;

/// Opens WebSocket connections (`ws://` and, via native-tls, `wss://`).
#[derive(Debug, Default)]
pub struct WsConnector;

impl WsConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Connector for WsConnector {
    type Conn = WsConnection;

    async fn connect(&self, endpoint: &str) -> Result<WsConnection, TransportError> {
        // `connect_async` resolves the URL, performs the TCP (and TLS)
        // handshake, and completes the HTTP Upgrade to WebSocket.
        let (stream, response) =
            connect_async(endpoint)
                .await
                .map_err(|e| TransportError::ConnectFailed {
                    endpoint: endpoint.to_string(),
                    reason: e.to_string(),
                })?;
        debug!(
            "connected to {endpoint} (HTTP {})",
            response.status().as_u16()
        );
        Ok(WsConnection { stream })
    }
}

/// One established WebSocket connection, exclusively owned by its session.
pub struct WsConnection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl Connection for WsConnection {
    async fn send_binary(&mut self, frame: Vec<u8>) -> Result<(), TransportError> {
        self.stream
            .send(WsMessage::Binary(frame))
            .await
            .map_err(|e| TransportError::Send(e.to_string()))
    }

    async fn next_event(&mut self) -> TransportEvent {
        loop {
            match self.stream.next().await {
                Some(Ok(WsMessage::Text(text))) => return TransportEvent::Text(text),
                Some(Ok(WsMessage::Binary(bytes))) => return TransportEvent::Binary(bytes),
                Some(Ok(WsMessage::Ping(_) | WsMessage::Pong(_))) => {
                    // Control frames; tungstenite answers pings on flush.
                    continue;
                }
                Some(Ok(WsMessage::Close(_))) => return TransportEvent::Closed,
                Some(Ok(WsMessage::Frame(_))) => continue,
                Some(Err(e)) => return TransportEvent::Failed(TransportError::Failed(e.to_string())),
                None => return TransportEvent::Closed,
            }
        }
    }

    async fn close(&mut self) {
        // Best-effort close handshake; on an already-broken socket this can
        // only fail, which is fine.
        let _ = self.stream.close(None).await;
    }
}

impl VpsClient<WsConnector> {
    /// Creates a client that talks to `config.endpoint` over WebSocket.
    ///
    /// This is the production constructor; tests use
    /// [`VpsClient::with_connector`] with the scripted mock transport.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_connector(config, WsConnector::new())
    }
}
