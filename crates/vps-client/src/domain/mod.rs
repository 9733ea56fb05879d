//! Domain layer: pure types with no I/O, no async, and no framework
//! dependencies.

pub mod config;
pub mod error;

pub use config::SessionConfig;
pub use error::{SessionError, SessionOutcome, TransportError};
