//! Current navigation state.
//!
//! # Design Decisions
//! - One state per controller, injected at construction (no process globals)
//! - Empty until the first navigation, then updated in place
//! - Single writer (the controller) behind a mutex; readers take snapshots

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::navigation::event::NavigationEvent;
use crate::routing::{QueryParams, RouteParams};

/// Normalized path plus decoded route and query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub path: String,
    pub params: RouteParams,
    pub query: QueryParams,
}

impl From<&NavigationState> for NavigationEvent {
    fn from(state: &NavigationState) -> Self {
        Self {
            path: state.path.clone(),
            params: state.params.clone(),
            query: state.query.clone(),
        }
    }
}

/// Shared handle to a navigation state.
///
/// Cloning the handle shares the state; a fresh handle is independent.
#[derive(Debug, Clone, Default)]
pub struct StateHandle {
    inner: Arc<Mutex<Option<NavigationState>>>,
}

impl StateHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state, or `None` before the first navigation.
    pub fn snapshot(&self) -> Option<NavigationState> {
        self.lock().clone()
    }

    /// Current normalized path, if any navigation has happened.
    pub fn current_path(&self) -> Option<String> {
        self.lock().as_ref().map(|s| s.path.clone())
    }

    /// Overwrite the state in place. Only the controller writes.
    pub(crate) fn update(&self, path: String, params: RouteParams, query: QueryParams) {
        let mut guard = self.lock();
        match guard.as_mut() {
            Some(state) => {
                state.path = path;
                state.params = params;
                state.query = query;
            }
            None => {
                *guard = Some(NavigationState {
                    path,
                    params,
                    query,
                });
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<NavigationState>> {
        // Plain data, safe to use after a poisoning panic
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
