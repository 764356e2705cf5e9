//! One browsing session: the active page and, on the review page, the mounted
//! review workflow.

use std::sync::Arc;

use tracing::debug;

use super::{
    clock::Clock,
    loader::{LoadState, PostLoader},
    resolver::{Page, ResolvedPage, resolve},
    review::{ReviewOptions, ReviewWorkflow},
    router::Router,
};
use crate::domain::{comments::default_review_thread, route::DASHBOARD_PAGE};

pub enum ReviewState {
    Loading,
    Ready(Box<ReviewWorkflow>),
    NotFound(String),
    Failed(String),
}

/// The review view as mounted for one post id.
pub struct ReviewMount {
    pub post_id: Option<String>,
    pub state: ReviewState,
}

pub struct Session {
    router: Router,
    loader: PostLoader,
    clock: Arc<dyn Clock>,
    review: ReviewOptions,
    page: ResolvedPage,
    mount: Option<ReviewMount>,
}

impl Session {
    pub fn new(
        router: Router,
        loader: PostLoader,
        clock: Arc<dyn Clock>,
        review: ReviewOptions,
    ) -> Self {
        let page = resolve(&router.current());
        Self {
            router,
            loader,
            clock,
            review,
            page,
            mount: None,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn page(&self) -> &ResolvedPage {
        &self.page
    }

    pub fn review(&self) -> Option<&ReviewMount> {
        self.mount.as_ref()
    }

    pub fn workflow_mut(&mut self) -> Option<&mut ReviewWorkflow> {
        match self.mount.as_mut().map(|mount| &mut mount.state) {
            Some(ReviewState::Ready(workflow)) => Some(workflow.as_mut()),
            _ => None,
        }
    }

    /// Bring the rendered view in line with the router.
    ///
    /// Entering the review page, or changing its post id, mounts a fresh
    /// review and fetches the posts again. Leaving it tears the mount down,
    /// which cancels any pending navigation.
    pub async fn sync(&mut self) {
        let page = resolve(&self.router.current());

        match &page.page {
            Page::PostReview { post_id } => {
                let remount = self
                    .mount
                    .as_ref()
                    .is_none_or(|mount| mount.post_id != *post_id);
                if remount {
                    self.unmount();
                    self.mount = Some(ReviewMount {
                        post_id: post_id.clone(),
                        state: ReviewState::Loading,
                    });
                    let state = self.loader.load(post_id.as_deref()).await;
                    let state = self.review_state(state);
                    if let Some(mount) = self.mount.as_mut() {
                        mount.state = state;
                    }
                }
            }
            _ => self.unmount(),
        }

        self.page = page;
    }

    /// The recovery action offered by the not-found and error views.
    pub fn back_to_dashboard(&self) {
        self.router.navigate(DASHBOARD_PAGE);
    }

    fn review_state(&self, state: LoadState) -> ReviewState {
        match state {
            LoadState::Loading => ReviewState::Loading,
            LoadState::Loaded(post) => ReviewState::Ready(Box::new(ReviewWorkflow::start(
                post,
                default_review_thread(),
                self.review.clone(),
                self.clock.clone(),
                self.router.clone(),
            ))),
            LoadState::NotFound(id) => ReviewState::NotFound(id),
            LoadState::Error(message) => ReviewState::Failed(message),
        }
    }

    fn unmount(&mut self) {
        if let Some(mut mount) = self.mount.take() {
            debug!(
                target: "onbrand::session",
                post_id = mount.post_id.as_deref().unwrap_or("<first>"),
                "review unmounted"
            );
            if let ReviewState::Ready(workflow) = &mut mount.state {
                workflow.teardown();
            }
        }
    }
}
