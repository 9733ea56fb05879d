//! Domain layer: immutable value records for one localization request.
//!
//! Everything here is plain data with serde derives — no I/O and no
//! validation beyond what the constructors document.

pub mod params;
