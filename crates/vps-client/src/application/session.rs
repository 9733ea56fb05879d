//! Per-request session state machine and its async driver.
//!
//! One session covers exactly one request/response exchange:
//!
//! ```text
//! Idle → Connecting → Connected → AwaitingReply → Completed
//!            │                         │
//!            └────────────→ Failed ←───┘
//! ```
//!
//! The driver owns its connection exclusively and processes events in
//! arrival order from a single task, so callbacks are strictly ordered and
//! non-overlapping. The only suspension point after send is a
//! `tokio::select!` over the next transport event, the deadline, and the
//! cancellation watch — no busy waiting.

use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

use vps_core::{decode_reply, LocalizationRequest};

use crate::application::transport::{Connection, Connector, TransportEvent};
use crate::domain::config::SessionConfig;
use crate::domain::error::{SessionError, SessionOutcome, TransportError};

// ── State machine ─────────────────────────────────────────────────────────────

/// Lifecycle states of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, nothing started yet.
    Idle,
    /// Opening the connection to the configured endpoint.
    Connecting,
    /// Connection established; the request frame is being sent.
    Connected,
    /// Frame sent; waiting for the first decodable reply.
    AwaitingReply,
    /// Terminal: a reply was decoded and delivered.
    Completed,
    /// Terminal: the session ended with a [`SessionError`].
    Failed,
}

impl SessionState {
    /// Returns `true` when moving from `self` to `next` is a legal
    /// transition of the session lifecycle.
    pub fn can_transition_to(self, next: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, next),
            (Idle, Connecting)
                | (Idle, Failed)
                | (Connecting, Connected)
                | (Connecting, Failed)
                | (Connected, AwaitingReply)
                | (Connected, Failed)
                | (AwaitingReply, Completed)
                | (AwaitingReply, Failed)
        )
    }

    /// Returns `true` for [`SessionState::Completed`] and
    /// [`SessionState::Failed`].
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Completed | SessionState::Failed)
    }
}

/// Advances the tracked state, logging the transition.
///
/// Illegal transitions are a programming error in the driver, caught in
/// debug builds.
fn advance(state: &mut SessionState, next: SessionState, session_id: Uuid) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal session transition {state:?} → {next:?}"
    );
    debug!("session {session_id}: {state:?} → {next:?}");
    *state = next;
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// Runs one complete session: encode, connect, send, await, close.
///
/// Returns the terminal outcome; the caller (the facade's spawned task)
/// hands it to the completion dispatcher. The connection is explicitly
/// closed before returning on every path that reached [`SessionState::Connected`].
pub(crate) async fn drive<C: Connector>(
    connector: &C,
    config: &SessionConfig,
    request: LocalizationRequest,
    mut cancelled: watch::Receiver<bool>,
    session_id: Uuid,
) -> SessionOutcome {
    let mut state = SessionState::Idle;

    // Encoding failures surface through the same completion path as
    // everything else, so they are handled here rather than in `submit`.
    let frame = match request.encode() {
        Ok(frame) => frame,
        Err(e) => {
            warn!("session {session_id}: request encoding failed: {e}");
            advance(&mut state, SessionState::Failed, session_id);
            return Err(SessionError::Encoding(e));
        }
    };
    debug!(
        "session {session_id}: encoded frame of {} bytes ({} image)",
        frame.len(),
        request.image.len()
    );

    // One deadline covers the whole exchange: connect, send, and reply.
    let deadline = tokio::time::sleep(config.timeout);
    tokio::pin!(deadline);

    advance(&mut state, SessionState::Connecting, session_id);

    let mut conn = tokio::select! {
        result = connector.connect(&config.endpoint) => match result {
            Ok(conn) => conn,
            Err(e) => {
                warn!("session {session_id}: connect failed: {e}");
                advance(&mut state, SessionState::Failed, session_id);
                return Err(SessionError::Transport(e));
            }
        },
        _ = &mut deadline => {
            advance(&mut state, SessionState::Failed, session_id);
            return Err(SessionError::Timeout(config.timeout));
        }
        _ = cancelled.changed() => {
            advance(&mut state, SessionState::Failed, session_id);
            return Err(SessionError::Cancelled);
        }
    };

    advance(&mut state, SessionState::Connected, session_id);

    // The send can stall on backpressure, so the deadline and cancellation
    // must be able to interrupt it too.
    tokio::select! {
        result = conn.send_binary(frame) => {
            if let Err(e) = result {
                warn!("session {session_id}: send failed: {e}");
                conn.close().await;
                advance(&mut state, SessionState::Failed, session_id);
                return Err(SessionError::Transport(e));
            }
        }
        _ = &mut deadline => {
            warn!("session {session_id}: send incomplete after {:?}", config.timeout);
            conn.close().await;
            advance(&mut state, SessionState::Failed, session_id);
            return Err(SessionError::Timeout(config.timeout));
        }
        _ = cancelled.changed() => {
            debug!("session {session_id}: cancelled by caller");
            conn.close().await;
            advance(&mut state, SessionState::Failed, session_id);
            return Err(SessionError::Cancelled);
        }
    }

    advance(&mut state, SessionState::AwaitingReply, session_id);

    let outcome = loop {
        tokio::select! {
            event = conn.next_event() => match event {
                TransportEvent::Text(text) => {
                    // Only the first decodable message is acted upon; an
                    // undecodable one fails the session instead of being
                    // silently discarded.
                    match decode_reply(&text) {
                        Ok(reply) => break Ok(reply),
                        Err(e) => {
                            warn!("session {session_id}: undecodable reply: {e}");
                            break Err(SessionError::Protocol(e));
                        }
                    }
                }
                TransportEvent::Binary(bytes) => {
                    warn!(
                        "session {session_id}: unexpected binary frame ({} bytes)",
                        bytes.len()
                    );
                    break Err(SessionError::UnexpectedBinary(bytes.len()));
                }
                TransportEvent::Closed => {
                    warn!("session {session_id}: connection closed before a reply");
                    break Err(SessionError::Transport(TransportError::ClosedBeforeReply));
                }
                TransportEvent::Failed(e) => {
                    warn!("session {session_id}: connection failed: {e}");
                    break Err(SessionError::Transport(e));
                }
            },
            _ = &mut deadline => {
                warn!("session {session_id}: no reply within {:?}", config.timeout);
                break Err(SessionError::Timeout(config.timeout));
            }
            _ = cancelled.changed() => {
                debug!("session {session_id}: cancelled by caller");
                break Err(SessionError::Cancelled);
            }
        }
    };

    // An idle connection left open after completion is a resource leak;
    // close on both terminal states.
    conn.close().await;

    match &outcome {
        Ok(reply) => {
            advance(&mut state, SessionState::Completed, session_id);
            debug!(
                "session {session_id}: completed ({})",
                if reply.is_success() { "success" } else { "failure" }
            );
        }
        Err(e) => {
            advance(&mut state, SessionState::Failed, session_id);
            debug!("session {session_id}: failed: {e}");
        }
    }

    outcome
}

// ── Tests ─────────────────────────────────────────────────────────────────────
