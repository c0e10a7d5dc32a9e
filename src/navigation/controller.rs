//! Navigation controller.
//!
//! # Responsibilities
//! - Own the navigation state and the binding to the host's history
//! - Resolve programmatic targets, push or replace history entries
//! - Re-evaluate the route table on every navigation
//! - Publish the result to subscribers before returning
//!
//! # Navigation Flow
//! ```text
//! navigate(target, replace)
//!     → resolve against origin (raw path on failure)
//!     → history push / replace
//!     → re-evaluate
//!
//! start() / handle_location_changed()
//!     → history.current_location()
//!     → re-evaluate
//!
//! re-evaluate:
//!     normalize path → RouteTable::evaluate → parse_query
//!     → update state in place → notify subscribers
//! ```
//!
//! # Design Decisions
//! - Synchronous: state is observable as soon as a call returns
//! - Never fails: no match resolves to the fallback or to nothing visible
//! - Navigating to the current location replaces instead of pushing, so repeats are idempotent

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::navigation::event::{NavigationEvent, Trigger};
use crate::navigation::history::{History, MemoryHistory};
use crate::navigation::location::{origin_root, resolve_target, Location};
use crate::navigation::state::StateHandle;
use crate::observability::metrics;
use crate::routing::{normalize_path, parse_query, Evaluation, RouteTable};

type Subscriber<T> = Box<dyn FnMut(&NavigationEvent, &Evaluation<'_, T>)>;

/// Identifies a subscriber for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Drives navigation for one route table.
pub struct NavigationController<T, H> {
    table: Arc<RouteTable<T>>,
    history: H,
    origin: Url,
    state: StateHandle,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_subscription: usize,
}

impl<T, H: fmt::Debug> fmt::Debug for NavigationController<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("routes", &self.table.len())
            .field("history", &self.history)
            .field("origin", &self.origin.as_str())
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T, H: History> NavigationController<T, H> {
    /// Create a controller.
    ///
    /// Targets resolve against the root of `origin`. Nothing is evaluated
    /// until [`start`](Self::start) or the first navigation.
    pub fn new(table: Arc<RouteTable<T>>, history: H, origin: &Url, state: StateHandle) -> Self {
        Self {
            table,
            history,
            origin: origin_root(origin),
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Register a subscriber, called after every navigation.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&NavigationEvent, &Evaluation<'_, T>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Evaluate the starting location once, without touching history.
    pub fn start(&mut self) -> NavigationEvent {
        let location = self.history.current_location();
        self.reevaluate(&location, Trigger::Initial)
    }

    /// Navigate to `target`, pushing a history entry unless `replace` is set.
    pub fn navigate(&mut self, target: &str, replace: bool) -> NavigationEvent {
        let location = resolve_target(&self.origin, target);

        let trigger = if replace || location == self.history.current_location() {
            self.history.replace(&location);
            Trigger::Replace
        } else {
            self.history.push(&location);
            Trigger::Push
        };

        self.reevaluate(&location, trigger)
    }

    /// Re-read the host location after back/forward and re-evaluate.
    pub fn handle_location_changed(&mut self) -> NavigationEvent {
        let location = self.history.current_location();
        self.reevaluate(&location, Trigger::LocationChanged)
    }

    /// Event describing the current state, if any navigation has happened.
    pub fn current(&self) -> Option<NavigationEvent> {
        self.state.snapshot().as_ref().map(NavigationEvent::from)
    }

    pub fn state(&self) -> &StateHandle {
        &self.state
    }

    pub fn route_table(&self) -> &RouteTable<T> {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    fn reevaluate(&mut self, location: &Location, trigger: Trigger) -> NavigationEvent {
        let path = normalize_path(&location.path).to_string();
        let evaluation = self.table.evaluate(&path);
        let query = parse_query(&location.search);

        self.state
            .update(path.clone(), evaluation.params.clone(), query.clone());

        let outcome = evaluation.outcome();
        metrics::record_navigation(trigger.as_str());
        metrics::record_route_outcome(outcome.as_str());
        tracing::debug!(
            path = %path,
            trigger = trigger.as_str(),
            outcome = outcome.as_str(),
            route_index = ?evaluation.route_index,
            "Navigation evaluated"
        );

        let event = NavigationEvent {
            path,
            params: evaluation.params.clone(),
            query,
        };

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event, &evaluation);
        }

        event
    }
}

impl<T> NavigationController<T, MemoryHistory> {
    /// Step back in the in-memory history. `None` at the oldest entry.
    pub fn back(&mut self) -> Option<NavigationEvent> {
        if self.history.back() {
            Some(self.handle_location_changed())
        } else {
            None
        }
    }

    /// Step forward in the in-memory history. `None` at the newest entry.
    pub fn forward(&mut self) -> Option<NavigationEvent> {
        if self.history.forward() {
            Some(self.handle_location_changed())
        } else {
            None
        }
    }
}
