//! # vps-core
//!
//! Wire protocol for the VPS (visual positioning service) localization
//! server. One request carries a captured camera frame plus the capture
//! geometry and device pose; the server replies with a geo-referenced
//! position fix or a structured failure.
//!
//! This crate is pure data and codec logic. It has no dependency on any
//! socket, async runtime, or OS API — the session layer in `vps-client`
//! drives the actual exchange.
//!
//! - **`domain`** – Immutable parameter records describing capture geometry
//!   (`InternalParameters`) and device pose (`ExternalParameters`), and the
//!   `LocalizationRequest` that pairs them with an image buffer.
//!
//! - **`protocol`** – The binary request frame layout (`frame`) and the JSON
//!   reply envelopes (`reply`). The frame format is fixed by the deployed
//!   server: a little-endian length prefix, the raw image bytes, then one
//!   undelimited JSON document.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `vps_core::LocalizationRequest` instead of the full module path.
pub use domain::params::{
    ExternalParameters, InternalParameters, LocalizationRequest, Quaternion, RequestParameters,
};
pub use protocol::frame::{encode_request, EncodeError};
pub use protocol::reply::{decode_reply, DecodeError, PositionFix, ServerReply};
