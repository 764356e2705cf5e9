//! Domain types: routes, posts and the review comment thread.

pub mod comments;
pub mod error;
pub mod posts;
pub mod route;
