//! Review workflow over a loaded post.
//!
//! A post is either under review or approved. Rejecting does not introduce a
//! third status: it records a note in the thread and leaves the status alone,
//! so a rejected post still reads as "Needs Review".
//!
//! Approve and reject both return the session to the dashboard after a short
//! delay. The delayed navigation is owned by the workflow and is cancelled
//! when the workflow is torn down or dropped.

use std::{sync::Arc, time::Duration};

use metrics::counter;
use tracing::info;

use super::{clock::Clock, router::Router, task::ScopedTask};
use crate::domain::{
    comments::{Comment, CommentGroup, CommentLog},
    posts::{Post, PostStatus},
    route::DASHBOARD_PAGE,
};

pub const REJECTION_NOTE: &str = "This post needs revisions before it can be published.";
pub const DEFAULT_NAVIGATION_DELAY: Duration = Duration::from_millis(1500);
pub const METRIC_REVIEW_ACTION_TOTAL: &str = "onbrand_review_action_total";

#[derive(Debug, Clone)]
pub struct ReviewOptions {
    pub current_user: String,
    pub navigation_delay: Duration,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            current_user: "John Doe".to_string(),
            navigation_delay: DEFAULT_NAVIGATION_DELAY,
        }
    }
}

impl From<&crate::config::ReviewSettings> for ReviewOptions {
    fn from(settings: &crate::config::ReviewSettings) -> Self {
        Self {
            current_user: settings.current_user.clone(),
            navigation_delay: settings.navigation_delay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewPhase {
    UnderReview,
    Approved,
}

pub struct ReviewWorkflow {
    post: Post,
    comments: CommentLog,
    options: ReviewOptions,
    clock: Arc<dyn Clock>,
    router: Router,
    pending: Option<ScopedTask>,
}

impl ReviewWorkflow {
    pub fn start(
        post: Post,
        thread: Vec<Comment>,
        options: ReviewOptions,
        clock: Arc<dyn Clock>,
        router: Router,
    ) -> Self {
        Self {
            post,
            comments: CommentLog::seeded(thread),
            options,
            clock,
            router,
            pending: None,
        }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn comments(&self) -> &CommentLog {
        &self.comments
    }

    pub fn grouped_comments(&self) -> Vec<CommentGroup<'_>> {
        self.comments.grouped()
    }

    pub fn phase(&self) -> ReviewPhase {
        match self.post.status {
            PostStatus::ReadyToPublish => ReviewPhase::Approved,
            PostStatus::NeedsReview => ReviewPhase::UnderReview,
        }
    }

    /// Whether the approve and reject controls are enabled.
    pub fn can_act(&self) -> bool {
        self.phase() == ReviewPhase::UnderReview
    }

    pub fn has_pending_navigation(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Mark the post ready to publish and head back to the dashboard.
    ///
    /// Returns `false` without scheduling anything when already approved.
    pub fn approve(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        self.post.status = PostStatus::ReadyToPublish;
        info!(
            target: "onbrand::review",
            post_id = self.post.id,
            "post approved"
        );
        counter!(METRIC_REVIEW_ACTION_TOTAL, "action" => "approve").increment(1);
        self.schedule_return();
        true
    }

    /// Record a rejection note and head back to the dashboard. The status is
    /// left untouched.
    pub fn reject(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        self.comments.push(Comment {
            author: self.options.current_user.clone(),
            text: REJECTION_NOTE.to_string(),
            timestamp: self.clock.timestamp(),
            is_ai: false,
            review_date: None,
        });
        info!(
            target: "onbrand::review",
            post_id = self.post.id,
            "post rejected"
        );
        counter!(METRIC_REVIEW_ACTION_TOTAL, "action" => "reject").increment(1);
        self.schedule_return();
        true
    }

    /// Append a comment from the current user. Blank text is ignored.
    pub fn add_comment(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.comments.push(Comment {
            author: self.options.current_user.clone(),
            text: text.to_string(),
            timestamp: self.clock.timestamp(),
            is_ai: false,
            review_date: Some(self.clock.today()),
        });
        counter!(METRIC_REVIEW_ACTION_TOTAL, "action" => "comment").increment(1);
        true
    }

    /// Cancel any pending navigation.
    pub fn teardown(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    fn schedule_return(&mut self) {
        let router = self.router.clone();
        self.pending = Some(ScopedTask::after(
            self.options.navigation_delay,
            move || router.navigate(DASHBOARD_PAGE),
        ));
    }
}
