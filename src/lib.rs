//! on.brand review console.
//!
//! A hash-routed client session: the [`application::router::Router`] derives
//! the active page from the URL fragment, and the review page loads a post
//! and drives it through the [`application::review::ReviewWorkflow`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
