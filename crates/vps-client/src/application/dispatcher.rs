//! Single-fire delivery of the terminal session outcome.
//!
//! The original callback-based design relied on caller discipline to avoid
//! double invocation. Here the at-most-once guarantee is structural: the
//! outcome travels over a `oneshot` channel whose sender is consumed on the
//! first [`CompletionDispatcher::complete`], and a second call is a logged
//! no-op.

use tokio::sync::oneshot;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::error::SessionOutcome;

/// Delivers exactly one [`SessionOutcome`] to the waiting caller.
pub struct CompletionDispatcher {
    tx: Option<oneshot::Sender<SessionOutcome>>,
    session_id: Uuid,
}

impl CompletionDispatcher {
    /// Creates a dispatcher and the receiver for its single outcome.
    pub fn channel(session_id: Uuid) -> (Self, oneshot::Receiver<SessionOutcome>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                tx: Some(tx),
                session_id,
            },
            rx,
        )
    }

    /// Delivers the outcome to the caller.
    ///
    /// Returns `true` if this call performed the delivery. A second call
    /// is suppressed (and logged) rather than re-invoking the caller; no
    /// retries happen at this layer.
    pub fn complete(&mut self, outcome: SessionOutcome) -> bool {
        match self.tx.take() {
            Some(tx) => {
                if tx.send(outcome).is_err() {
                    // The caller dropped its handle; the outcome has nowhere
                    // to go, which is fine — the session still completed.
                    debug!(
                        "session {}: outcome discarded (handle dropped)",
                        self.session_id
                    );
                }
                true
            }
            None => {
                warn!(
                    "session {}: duplicate completion suppressed",
                    self.session_id
                );
                false
            }
        }
    }

    /// Returns `true` once the outcome has been delivered.
    pub fn is_spent(&self) -> bool {
        self.tx.is_none()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use vps_core::ServerReply;

    use crate::domain::error::SessionError;

    #[test]
    fn test_first_complete_delivers_the_outcome() {
        // Arrange
        let (mut dispatcher, rx) = CompletionDispatcher::channel(Uuid::new_v4());

        // Act
        let delivered = dispatcher.complete(Ok(ServerReply::Failure {
            message: "no match".to_string(),
        }));

        // Assert
        assert!(delivered);
        let outcome = tokio_test::block_on(rx).expect("outcome must arrive");
        assert!(matches!(outcome, Ok(ServerReply::Failure { .. })));
    }

    #[test]
    fn test_second_complete_is_a_no_op() {
        // Arrange
        let (mut dispatcher, rx) = CompletionDispatcher::channel(Uuid::new_v4());
        assert!(dispatcher.complete(Err(SessionError::Cancelled)));

        // Act: a second delivery attempt must not reach the receiver
        let delivered = dispatcher.complete(Err(SessionError::Cancelled));

        // Assert
        assert!(!delivered);
        assert!(dispatcher.is_spent());
        let outcome = tokio_test::block_on(rx).expect("first outcome must arrive");
        assert!(matches!(outcome, Err(SessionError::Cancelled)));
    }

    #[test]
    fn test_complete_with_dropped_receiver_does_not_panic() {
        // Arrange
        let (mut dispatcher, rx) = CompletionDispatcher::channel(Uuid::new_v4());
        drop(rx);

        // Act / Assert: delivery still counts as performed
        assert!(dispatcher.complete(Err(SessionError::Cancelled)));
        assert!(dispatcher.is_spent());
    }

    #[test]
    fn test_new_dispatcher_is_not_spent() {
        let (dispatcher, _rx) = CompletionDispatcher::channel(Uuid::new_v4());
        assert!(!dispatcher.is_spent());
    }
}
