//! Application layer: the session lifecycle and its collaborators.
//!
//! - [`transport`] – the `Connector`/`Connection` trait seam the session
//!   drives; implementations live in the infrastructure layer.
//! - [`session`] – the per-request state machine and the async driver.
//! - [`dispatcher`] – single-fire delivery of the terminal outcome.
//! - [`localize`] – the public `VpsClient`/`SessionHandle` facade.

pub mod dispatcher;
pub mod localize;
pub mod session;
pub mod transport;

pub use localize::{SessionHandle, VpsClient};
pub use session::SessionState;
pub use transport::{Connection, Connector, TransportEvent};
