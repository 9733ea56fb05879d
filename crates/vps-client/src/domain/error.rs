//! Error taxonomy for one localization session.
//!
//! Every failure surfaces through the same single-shot completion path as a
//! success — nothing is thrown across an async boundary and nothing is
//! silently dropped. The caller always observes exactly one terminal
//! outcome: a decoded [`vps_core::ServerReply`] or one [`SessionError`].

use std::time::Duration;

use thiserror::Error;
use vps_core::{DecodeError, EncodeError, ServerReply};

/// The terminal outcome of one session.
///
/// Note that a structured server-side failure is `Ok(ServerReply::Failure)`,
/// not an error: the exchange itself succeeded.
pub type SessionOutcome = Result<ServerReply, SessionError>;

/// Transport-level failures (connect, send, and connection loss).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// The WebSocket connection could not be established.
    #[error("failed to connect to {endpoint}: {reason}")]
    ConnectFailed { endpoint: String, reason: String },

    /// Sending the request frame failed.
    #[error("failed to send request frame: {0}")]
    Send(String),

    /// The server closed the connection before any reply was decoded.
    #[error("connection closed before a reply arrived")]
    ClosedBeforeReply,

    /// An I/O error occurred on the established connection.
    #[error("connection failed: {0}")]
    Failed(String),

    /// The session task terminated without delivering an outcome.
    #[error("session ended without delivering a result")]
    Aborted,
}

/// Everything that can terminate a session unsuccessfully.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The request parameters could not be encoded into a frame.
    #[error("request encoding failed: {0}")]
    Encoding(#[from] EncodeError),

    /// Connect failure, send failure, or abnormal disconnect.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// No reply arrived within the configured deadline.
    #[error("no reply within {0:?}")]
    Timeout(Duration),

    /// An inbound message matched neither reply envelope.
    #[error("protocol violation: {0}")]
    Protocol(#[from] DecodeError),

    /// The server sent a binary frame where only text replies are defined.
    #[error("protocol violation: unexpected binary frame of {0} bytes")]
    UnexpectedBinary(usize),

    /// The caller cancelled the session before it completed.
    #[error("session cancelled by caller")]
    Cancelled,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
