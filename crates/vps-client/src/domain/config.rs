//! Session configuration.
//!
//! [`SessionConfig`] is the single source of truth for the per-request
//! settings. Keeping it as a plain struct (no global state, no environment
//! reads) makes the client easy to embed in tests: point the endpoint at a
//! loopback server and shorten the deadline.

use std::time::Duration;

/// Default overall deadline for one request/response exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// All runtime configuration for one localization session.
///
/// Build this once and hand it to [`crate::VpsClient::new`]; every submitted
/// request uses the same endpoint and deadline.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use vps_client::SessionConfig;
///
/// let cfg = SessionConfig::new("wss://vps.example.com/ws")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(cfg.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// WebSocket URL of the localization endpoint (`ws://` or `wss://`).
    ///
    /// A configuration value, never hard-coded in the session logic.
    pub endpoint: String,

    /// Overall deadline covering connect, send, and await-reply.
    ///
    /// When it elapses the session fails with
    /// [`crate::SessionError::Timeout`]. The original client had no deadline
    /// at all; a hung connection would wait forever.
    pub timeout: Duration,
}

impl SessionConfig {
    /// Creates a configuration for `endpoint` with the default deadline.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the overall deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
