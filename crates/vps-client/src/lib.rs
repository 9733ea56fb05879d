//! vps-client library crate.
//!
//! Drives one localization exchange against a VPS server: encode the request
//! frame, open a WebSocket connection, send the frame as a single binary
//! message, await the first decodable reply, and deliver exactly one terminal
//! outcome to the caller.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Caller
//!   ↕  LocalizationRequest / SessionHandle
//! [vps-client]
//!   ├── domain/           SessionConfig, SessionError/TransportError taxonomy
//!   ├── application/      Session state machine, transport trait seam,
//!   │                     completion dispatcher, VpsClient facade
//!   └── infrastructure/
//!         └── transport/  tokio-tungstenite connector + scripted mock
//!   ↕  one binary frame out, JSON text frames in
//! VPS server (WebSocket endpoint)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain` and `vps-core`, and on the transport
//!   only through the [`application::transport::Connector`] trait.
//! - `infrastructure` depends on all other layers plus `tokio-tungstenite`.
//!
//! # Session model
//!
//! Each request owns a short-lived, single-purpose connection: there is no
//! reconnection, no authentication, and no multiplexing of requests over one
//! socket. Retry policy belongs to the caller, who can simply submit again.
//!
//! # Example
//!
//! ```no_run
//! use vps_client::{SessionConfig, VpsClient};
//! use vps_core::{ExternalParameters, InternalParameters, LocalizationRequest, Quaternion, RequestParameters};
//!
//! # async fn example() {
//! let client = VpsClient::new(SessionConfig::new("wss://vps.example.com/ws"));
//! let request = LocalizationRequest::new(
//!     std::fs::read("frame.jpg").unwrap(),
//!     RequestParameters::new(
//!         InternalParameters::new(1280.0, 720.0, 40.0, false),
//!         ExternalParameters::new(37.358, -121.935, -11.0, Quaternion::new(1.0, 0.0, 0.0, 0.0)),
//!     ),
//! );
//! let outcome = client.submit(request).wait().await;
//! # let _ = outcome;
//! # }
//! ```

/// Domain layer: configuration and the error taxonomy (no I/O).
pub mod domain;

/// Application layer: session lifecycle, dispatcher, and the public facade.
pub mod application;

/// Infrastructure layer: WebSocket transport and the test-double transport.
pub mod infrastructure;

// Re-export the public surface at the crate root.
pub use application::localize::{SessionHandle, VpsClient};
pub use domain::config::SessionConfig;
pub use domain::error::{SessionError, SessionOutcome, TransportError};
pub use infrastructure::transport::ws::WsConnector;

// The protocol types callers need to build requests and read outcomes.
pub use vps_core::{
    ExternalParameters, InternalParameters, LocalizationRequest, PositionFix, Quaternion,
    RequestParameters, ServerReply,
};
