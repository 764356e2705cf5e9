//! Infrastructure adapters and runtime bootstrap.

pub mod api;
pub mod error;
pub mod location;
pub mod telemetry;
