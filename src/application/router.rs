//! Hash-fragment router.
//!
//! The router owns the single [`RouteState`] of a session and publishes it
//! through a watch channel. Components that need the current route or the
//! ability to navigate receive a cloned [`Router`] handle; there is no global
//! routing state.
//!
//! Two paths update the state: [`Router::navigate`] writes it optimistically,
//! and [`Router::on_fragment_change`] re-derives it from the [`Location`].
//! Both compare before replacing, so the notification that follows a
//! `navigate` call is a no-op.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::debug;

use super::task::ScopedTask;
use crate::domain::route::{HOME_PAGE, RouteState, fragment_for, is_blank, parse_fragment};

/// The address-bar surface the router reads from and writes to.
pub trait Location: Send + Sync {
    /// Current fragment including the leading `#`, or empty.
    fn fragment(&self) -> String;

    /// Replace the fragment. Implementations notify subscribers only when the
    /// value actually changes.
    fn set_fragment(&self, fragment: &str);

    /// Register for fragment-change notifications. Dropping the receiver
    /// unregisters it.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<String>;
}

#[derive(Clone)]
pub struct Router {
    inner: Arc<RouterInner>,
}

struct RouterInner {
    location: Arc<dyn Location>,
    state: watch::Sender<RouteState>,
}

impl Router {
    /// Derive the initial route from `location`. A blank fragment starts at
    /// `home` and rewrites the location to `#/home`.
    pub fn mount(location: Arc<dyn Location>) -> Self {
        let initial = derive_route(location.as_ref());
        debug!(
            target: "onbrand::router",
            page = %initial.page_id,
            "router mounted"
        );
        let (state, _) = watch::channel(initial);
        Self {
            inner: Arc::new(RouterInner { location, state }),
        }
    }

    pub fn current(&self) -> RouteState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RouteState> {
        self.inner.state.subscribe()
    }

    pub fn location(&self) -> &Arc<dyn Location> {
        &self.inner.location
    }

    /// Re-read the fragment and replace the route if it differs.
    ///
    /// Returns whether the route changed.
    pub fn on_fragment_change(&self) -> bool {
        let next = derive_route(self.inner.location.as_ref());
        self.replace(next)
    }

    /// Point the location at `#/<page_id>` and switch to that page at once.
    ///
    /// The optimistic route never carries parameters, so parameterized pages
    /// such as `post-review/<id>` must be reached by setting the fragment.
    pub fn navigate(&self, page_id: &str) {
        self.inner.location.set_fragment(&fragment_for(page_id));
        self.replace(RouteState::page(page_id));
    }

    /// Forward location notifications into [`Router::on_fragment_change`] in
    /// delivery order until the returned guard is dropped.
    pub fn listen(&self) -> RouteListener {
        let mut changes = self.inner.location.subscribe();
        let router = self.clone();
        let task = ScopedTask::spawn(async move {
            while changes.recv().await.is_some() {
                router.on_fragment_change();
            }
        });
        RouteListener { _task: task }
    }

    fn replace(&self, next: RouteState) -> bool {
        self.inner.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            debug!(
                target: "onbrand::router",
                from = %current.page_id,
                to = %next.page_id,
                params = ?next.params,
                "route changed"
            );
            *current = next;
            true
        })
    }
}

fn derive_route(location: &dyn Location) -> RouteState {
    let fragment = location.fragment();
    if is_blank(&fragment) {
        location.set_fragment(&fragment_for(HOME_PAGE));
        return RouteState::home();
    }
    parse_fragment(&fragment)
}

/// Keeps a router subscribed to its location. Unsubscribes on drop.
#[must_use = "the router stops listening when this guard is dropped"]
pub struct RouteListener {
    _task: ScopedTask,
}
