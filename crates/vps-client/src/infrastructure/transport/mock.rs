//! Scripted in-memory transport for tests.
//!
//! [`MockConnector`] hands out connections that record every sent frame and
//! replay a fixed script of [`TransportEvent`]s. Once the script runs out the
//! connection goes silent (the future never resolves), which is exactly what
//! the timeout and cancellation paths need to exercise.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::transport::{Connection, Connector, TransportEvent};
use crate::domain::error::TransportError;

/// Shared observation point for everything the mock transport saw.
#[derive(Debug, Default)]
pub struct MockTransportState {
    /// Every binary frame passed to [`Connection::send_binary`], in order.
    pub sent_frames: Mutex<Vec<Vec<u8>>>,
    connects: AtomicUsize,
    closes: AtomicUsize,
}

impl MockTransportState {
    /// Number of successful [`Connector::connect`] calls.
    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Number of [`Connection::close`] calls.
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

/// A connector whose connections replay a pre-arranged event script.
pub struct MockConnector {
    state: Arc<MockTransportState>,
    script: Mutex<VecDeque<TransportEvent>>,
    connect_failure: Option<String>,
    stall_sends: bool,
}

impl MockConnector {
    /// A connector whose connections accept frames but never emit an event.
    pub fn new() -> Self {
        Self::replying_with(Vec::new())
    }

    /// A connector whose first connection emits `events` in order, then
    /// goes silent.
    pub fn replying_with(events: Vec<TransportEvent>) -> Self {
        Self {
            state: Arc::new(MockTransportState::default()),
            script: Mutex::new(events.into()),
            connect_failure: None,
            stall_sends: false,
        }
    }

    /// A connector that refuses every connection attempt with `reason`.
    pub fn failing_to_connect(reason: &str) -> Self {
        Self {
            state: Arc::new(MockTransportState::default()),
            script: Mutex::new(VecDeque::new()),
            connect_failure: Some(reason.to_string()),
            stall_sends: false,
        }
    }

    /// A connector whose connections accept but whose sends never complete,
    /// as on a socket stalled by backpressure.
    pub fn stalling_on_send() -> Self {
        Self {
            stall_sends: true,
            ..Self::new()
        }
    }

    /// The shared state, for assertions after the session ends.
    pub fn state(&self) -> Arc<MockTransportState> {
        Arc::clone(&self.state)
    }
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for MockConnector {
    type Conn = MockConnection;

    async fn connect(&self, endpoint: &str) -> Result<MockConnection, TransportError> {
        if let Some(reason) = &self.connect_failure {
            return Err(TransportError::ConnectFailed {
                endpoint: endpoint.to_string(),
                reason: reason.clone(),
            });
        }
        self.state.connects.fetch_add(1, Ordering::SeqCst);
        // Each connection drains whatever is left of the script; sessions are
        // one connection each, so tests never share it.
        let script = std::mem::take(&mut *self.script.lock().unwrap());
        Ok(MockConnection {
            state: Arc::clone(&self.state),
            script,
            stall_sends: self.stall_sends,
        })
    }
}

/// One scripted connection.
pub struct MockConnection {
    state: Arc<MockTransportState>,
    script: VecDeque<TransportEvent>,
    stall_sends: bool,
}

#[async_trait]
impl Connection for MockConnection {
    async fn send_binary(&mut self, frame: Vec<u8>) -> Result<(), TransportError> {
        if self.stall_sends {
            std::future::pending::<()>().await;
        }
        self.state.sent_frames.lock().unwrap().push(frame);
        Ok(())
    }

    async fn next_event(&mut self) -> TransportEvent {
        match self.script.pop_front() {
            Some(event) => event,
            // Script exhausted: stay silent forever so the session's own
            // deadline or cancellation decides the outcome.
            None => std::future::pending().await,
        }
    }

    async fn close(&mut self) {
        self.state.closes.fetch_add(1, Ordering::SeqCst);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
