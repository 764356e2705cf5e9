//! In-memory address bar used by the console host and tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tracing::trace;

use crate::application::router::Location;

#[derive(Debug, Default)]
pub struct MemoryLocation {
    inner: Mutex<LocationState>,
}

#[derive(Debug, Default)]
struct LocationState {
    fragment: String,
    listeners: Vec<mpsc::UnboundedSender<String>>,
}

impl MemoryLocation {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(LocationState {
                fragment: fragment.into(),
                listeners: Vec::new(),
            }),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.state()
            .listeners
            .iter()
            .filter(|listener| !listener.is_closed())
            .count()
    }

    fn state(&self) -> MutexGuard<'_, LocationState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.state().fragment.clone()
    }

    fn set_fragment(&self, fragment: &str) {
        let mut state = self.state();
        if state.fragment == fragment {
            return;
        }
        state.fragment = fragment.to_string();
        trace!(target: "onbrand::location", fragment, "fragment changed");
        state
            .listeners
            .retain(|listener| listener.send(fragment.to_string()).is_ok());
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.state().listeners.push(tx);
        rx
    }
}
