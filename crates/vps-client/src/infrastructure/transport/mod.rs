//! Transport implementations.
//!
//! - [`ws`] – the production WebSocket transport (tokio-tungstenite).
//! - [`mock`] – a scripted in-memory transport for tests.

pub mod mock;
pub mod ws;

pub use ws::WsConnector;
