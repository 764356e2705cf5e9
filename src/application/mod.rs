//! Application services: routing, loading and the review workflow.

pub mod clock;
pub mod error;
pub mod loader;
pub mod repos;
pub mod resolver;
pub mod review;
pub mod router;
pub mod session;
pub mod task;
