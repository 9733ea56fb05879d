//! Public facade: submit one localization request, receive one outcome.
//!
//! [`VpsClient::submit`] spawns a dedicated tokio task per request and
//! returns a [`SessionHandle`] immediately. The handle is the caller's only
//! link to the session: await it for the terminal outcome, or cancel it at
//! any time before completion.
//!
//! The client is generic over the transport [`Connector`] so that the full
//! lifecycle can be tested against the scripted mock transport; production
//! code uses the tokio-tungstenite connector via [`crate::VpsClient::new`].

use std::sync::Arc;

use tokio::sync::{oneshot, watch};
use tracing::debug;
use uuid::Uuid;

use vps_core::LocalizationRequest;

use crate::application::dispatcher::CompletionDispatcher;
use crate::application::session;
use crate::application::transport::Connector;
use crate::domain::config::SessionConfig;
use crate::domain::error::{SessionError, SessionOutcome, TransportError};

/// Client for the VPS localization service.
///
/// Cheap to clone the contents of: one client can submit any number of
/// requests, each on its own short-lived connection.
pub struct VpsClient<C: Connector> {
    config: SessionConfig,
    connector: Arc<C>,
}

impl<C: Connector> VpsClient<C> {
    /// Creates a client that opens connections through `connector`.
    ///
    /// Production code normally uses [`crate::VpsClient::new`] instead, which
    /// wires in the WebSocket connector.
    pub fn with_connector(config: SessionConfig, connector: C) -> Self {
        Self {
            config,
            connector: Arc::new(connector),
        }
    }

    /// Returns the configuration this client submits requests with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Submits one request on a fresh session.
    ///
    /// Never blocks and never fails directly: every error — including a
    /// request that cannot be encoded — arrives through the returned
    /// handle's single-shot completion path.
    pub fn submit(&self, request: LocalizationRequest) -> SessionHandle {
        let session_id = Uuid::new_v4();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let (mut dispatcher, outcome_rx) = CompletionDispatcher::channel(session_id);

        let config = self.config.clone();
        let connector = Arc::clone(&self.connector);

        debug!("session {session_id}: submitting to {}", config.endpoint);

        tokio::spawn(async move {
            let outcome =
                session::drive(connector.as_ref(), &config, request, cancel_rx, session_id).await;
            dispatcher.complete(outcome);
        });

        SessionHandle {
            session_id,
            cancel: cancel_tx,
            outcome: outcome_rx,
        }
    }
}

/// The caller's handle to one in-flight session.
pub struct SessionHandle {
    session_id: Uuid,
    cancel: watch::Sender<bool>,
    outcome: oneshot::Receiver<SessionOutcome>,
}

impl SessionHandle {
    /// Identifier of this session, as used in log lines.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Cancels the session.
    ///
    /// Closes the underlying connection and completes the session with
    /// [`SessionError::Cancelled`] exactly once. Cancelling an already
    /// completed session has no effect; cancelling twice is harmless.
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    /// Waits for the terminal outcome.
    ///
    /// Exactly one outcome is ever delivered per session. If the session
    /// task died without completing (a bug, not a protocol condition), this
    /// resolves to [`TransportError::Aborted`].
    pub async fn wait(self) -> SessionOutcome {
        match self.outcome.await {
            Ok(outcome) => outcome,
            Err(_) => Err(SessionError::Transport(TransportError::Aborted)),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
