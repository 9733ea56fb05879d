//! Reply decoder: parses one inbound text message into a typed result.
//!
//! The server distinguishes outcomes with a `status` discriminator, but the
//! two envelopes have different shapes:
//!
//! ```json
//! {"status":"success","data":{"latitude":…,"longitude":…,"x":…,"y":…,"z":…,"height":…,"yx":…,"xx":…}}
//! {"msg":"no match for query image","status":"failure"}
//! ```
//!
//! Decoding is attempted in that order. A failure envelope produces a real
//! [`ServerReply::Failure`] carrying the server's message text. A message
//! that matches neither shape is an error the session layer must surface —
//! never a silent drop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while decoding an inbound message.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// The message matches neither the success nor the failure envelope.
    #[error("message matches neither reply envelope: {snippet}")]
    UnknownEnvelope { snippet: String },
}

/// The numeric payload of a successful localization.
///
/// Geodetic coordinates plus a camera-space offset and two auxiliary
/// alignment scalars, exactly as the server reports them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub height: f64,
    pub yx: f64,
    pub xx: f64,
}

/// One decoded server reply: either a position fix or a structured failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerReply {
    /// The server localized the frame.
    Success(PositionFix),
    /// The server processed the request but could not localize it.
    Failure { message: String },
}

impl ServerReply {
    /// Returns `true` for the [`ServerReply::Success`] variant.
    pub fn is_success(&self) -> bool {
        matches!(self, ServerReply::Success(_))
    }
}

/// Status discriminator shared by both envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ReplyStatus {
    Success,
    Failure,
}

#[derive(Debug, Deserialize)]
struct SuccessEnvelope {
    status: ReplyStatus,
    data: PositionFix,
}

#[derive(Debug, Deserialize)]
struct FailureEnvelope {
    msg: String,
    status: ReplyStatus,
}

/// Maximum number of characters of the offending message quoted in a
/// [`DecodeError::UnknownEnvelope`].
const SNIPPET_MAX: usize = 120;

/// Decodes one inbound text message.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownEnvelope`] when the text matches neither
/// known schema, quoting a truncated snippet of the message for the log.
///
/// # Examples
///
/// ```rust
/// use vps_core::{decode_reply, ServerReply};
///
/// let reply = decode_reply(r#"{"msg":"bad request","status":"failure"}"#).unwrap();
/// assert_eq!(reply, ServerReply::Failure { message: "bad request".to_string() });
/// ```
pub fn decode_reply(text: &str) -> Result<ServerReply, DecodeError> {
    if let Ok(envelope) = serde_json::from_str::<SuccessEnvelope>(text) {
        // A success-shaped document whose discriminator says "failure" is
        // not a success; fall through to the failure envelope.
        if envelope.status == ReplyStatus::Success {
            return Ok(ServerReply::Success(envelope.data));
        }
    }

    if let Ok(envelope) = serde_json::from_str::<FailureEnvelope>(text) {
        // Same discriminator rule as the success branch: a failure-shaped
        // document claiming "success" matches neither envelope.
        if envelope.status == ReplyStatus::Failure {
            return Ok(ServerReply::Failure {
                message: envelope.msg,
            });
        }
    }

    Err(DecodeError::UnknownEnvelope {
        snippet: snippet_of(text),
    })
}

/// Truncates `text` to at most [`SNIPPET_MAX`] characters on a char boundary.
fn snippet_of(text: &str) -> String {
    if text.chars().count() <= SNIPPET_MAX {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(SNIPPET_MAX).collect();
        format!("{truncated}…")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
