//! Transport trait seam between the session driver and the socket library.
//!
//! The session state machine only needs four capabilities from a transport:
//! connect, send one binary frame, receive the next event, and close. Coding
//! against this pair of traits keeps the lifecycle logic free of any
//! WebSocket types, so the full state machine is unit-testable with the
//! scripted mock in `infrastructure::transport::mock`.
//!
//! Protocol-level control frames (WebSocket ping/pong) are absorbed below
//! this seam; the session only ever sees the events defined here.

use async_trait::async_trait;

use crate::domain::error::TransportError;

/// One observable event on an established connection.
#[derive(Debug)]
pub enum TransportEvent {
    /// A complete inbound text message.
    Text(String),
    /// A complete inbound binary message. The reply protocol is text-only,
    /// so the session treats this as a protocol violation.
    Binary(Vec<u8>),
    /// The peer closed the connection.
    Closed,
    /// The connection failed with a transport error.
    Failed(TransportError),
}

/// An established, exclusively-owned connection.
///
/// One connection backs exactly one request/response cycle; it is never
/// shared across sessions, so implementations need no internal locking.
#[async_trait]
pub trait Connection: Send {
    /// Sends one complete binary message.
    async fn send_binary(&mut self, frame: Vec<u8>) -> Result<(), TransportError>;

    /// Waits for the next event. Events are delivered strictly in arrival
    /// order; this method is only ever polled by the single session task.
    async fn next_event(&mut self) -> TransportEvent;

    /// Closes the connection. Best-effort: the session is over either way,
    /// and a close failure on an already-broken socket is not an error.
    async fn close(&mut self);
}

/// Opens connections to an endpoint.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    /// The connection type this connector produces.
    type Conn: Connection;

    /// Opens a new connection to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ConnectFailed`] if the connection cannot be
    /// established.
    async fn connect(&self, endpoint: &str) -> Result<Self::Conn, TransportError>;
}
