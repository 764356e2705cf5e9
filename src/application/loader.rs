//! Post loading for the review view.

use std::sync::Arc;

use metrics::counter;
use tracing::{info, warn};

use super::repos::PostSource;
use crate::domain::{
    error::DomainError,
    posts::{Post, select_post},
};

pub const METRIC_POST_LOAD_TOTAL: &str = "onbrand_post_load_total";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Post),
    NotFound(String),
    Error(String),
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }

    fn outcome(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::NotFound(_) => "not_found",
            LoadState::Error(_) => "error",
        }
    }
}

/// Fetches the whole collection on every call and picks one post out of it.
/// Nothing is cached and failures are not retried.
#[derive(Clone)]
pub struct PostLoader {
    source: Arc<dyn PostSource>,
}

impl PostLoader {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self { source }
    }

    /// Resolve `post_id` to a terminal [`LoadState`]. An empty id counts as
    /// no id at all.
    pub async fn load(&self, post_id: Option<&str>) -> LoadState {
        let post_id = post_id.filter(|id| !id.is_empty());

        let state = match self.source.fetch_posts().await {
            Err(err) => {
                warn!(target: "onbrand::loader", error = %err, "failed to fetch posts");
                LoadState::Error(err.to_string())
            }
            Ok(posts) => match select_post(posts, post_id) {
                Ok(post) => LoadState::Loaded(post),
                Err(DomainError::PostNotFound { id }) => LoadState::NotFound(id),
                Err(err @ DomainError::NoPosts) => LoadState::Error(err.to_string()),
            },
        };

        info!(
            target: "onbrand::loader",
            post_id = post_id.unwrap_or("<first>"),
            outcome = state.outcome(),
            "post load finished"
        );
        counter!(METRIC_POST_LOAD_TOTAL, "outcome" => state.outcome()).increment(1);
        state
    }
}
