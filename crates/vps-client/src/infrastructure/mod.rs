//! Infrastructure layer: concrete transports behind the application-layer
//! [`crate::application::transport::Connector`] seam.

pub mod transport;
