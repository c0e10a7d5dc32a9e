//! Route table and evaluation.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Find the first route matching a path
//! - Fall back to the not-found handle, or report that nothing is active
//!
//! # Design Decisions
//! - Immutable after construction (shareable without locks)
//! - O(n) scan in registration order: first match wins, no specificity scoring
//! - Shadowed or duplicate patterns are the caller's concern, not detected here
//! - No match is a normal outcome, never an error

use serde::Serialize;

use crate::observability::metrics;
use crate::routing::matcher::{Matcher, RouteParams};
use crate::routing::pattern::RoutePattern;

/// A registered route: compiled pattern plus opaque content handle.
#[derive(Debug, Clone)]
pub struct Route<T> {
    pattern: RoutePattern,
    handle: T,
}

impl<T> Route<T> {
    pub fn new(pattern: impl Into<RoutePattern>, handle: T) -> Self {
        Self {
            pattern: pattern.into(),
            handle,
        }
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn handle(&self) -> &T {
        &self.handle
    }
}

/// Which kind of content an evaluation selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutcome {
    Matched,
    Fallback,
    None,
}

impl RouteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteOutcome::Matched => "matched",
            RouteOutcome::Fallback => "fallback",
            RouteOutcome::None => "none",
        }
    }
}

/// Result of evaluating a table against a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<'a, T> {
    /// Content to show, or `None` when nothing should be visible.
    pub active_handle: Option<&'a T>,
    /// Index of the matched route in registration order.
    pub route_index: Option<usize>,
    pub params: RouteParams,
    pub used_fallback: bool,
}

impl<'a, T> Evaluation<'a, T> {
    pub fn outcome(&self) -> RouteOutcome {
        if self.route_index.is_some() {
            RouteOutcome::Matched
        } else if self.used_fallback {
            RouteOutcome::Fallback
        } else {
            RouteOutcome::None
        }
    }

    /// True if the route at `index` is the visible one.
    pub fn is_active_route(&self, index: usize) -> bool {
        self.route_index == Some(index)
    }
}

/// Ordered route table with an optional fallback.
#[derive(Debug, Clone)]
pub struct RouteTable<T> {
    routes: Vec<Route<T>>,
    fallback: Option<T>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
        }
    }
}

impl<T> RouteTable<T> {
    pub fn new(routes: Vec<Route<T>>, fallback: Option<T>) -> Self {
        for route in &routes {
            let pattern = &route.pattern;
            if pattern.discarded_segments() > 0 {
                tracing::warn!(
                    pattern = %pattern,
                    discarded = pattern.discarded_segments(),
                    "Segments after wildcard are ignored"
                );
            }
            if pattern.is_malformed() {
                tracing::warn!(
                    pattern = %pattern,
                    "Route pattern has an empty parameter name; only a trailing wildcard prefix can match it"
                );
                metrics::record_malformed_pattern();
            }
        }

        tracing::debug!(
            routes = routes.len(),
            has_fallback = fallback.is_some(),
            "Route table compiled"
        );
        Self { routes, fallback }
    }

    /// Start an empty builder.
    pub fn builder() -> RouteTableBuilder<T> {
        RouteTableBuilder::default()
    }

    /// Registered routes in evaluation order.
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn fallback(&self) -> Option<&T> {
        self.fallback.as_ref()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Evaluate the table against a path.
    pub fn evaluate(&self, path: &str) -> Evaluation<'_, T> {
        for (index, route) in self.routes.iter().enumerate() {
            let result = route.pattern.match_path(path);
            if result.is_match() {
                tracing::trace!(pattern = %route.pattern, path, index, "Route matched");
                return Evaluation {
                    active_handle: Some(&route.handle),
                    route_index: Some(index),
                    params: result.params,
                    used_fallback: false,
                };
            }
        }

        Evaluation {
            active_handle: self.fallback.as_ref(),
            route_index: None,
            params: RouteParams::new(),
            used_fallback: self.fallback.is_some(),
        }
    }
}

/// Builder collecting routes in registration order.
#[derive(Debug)]
pub struct RouteTableBuilder<T> {
    routes: Vec<Route<T>>,
    fallback: Option<T>,
}

impl<T> Default for RouteTableBuilder<T> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
        }
    }
}

impl<T> RouteTableBuilder<T> {
    /// Register a route after all previously registered ones.
    pub fn route(mut self, pattern: impl Into<RoutePattern>, handle: T) -> Self {
        self.routes.push(Route::new(pattern, handle));
        self
    }

    pub fn fallback(mut self, handle: T) -> Self {
        self.fallback = Some(handle);
        self
    }

    pub fn build(self) -> RouteTable<T> {
        RouteTable::new(self.routes, self.fallback)
    }
}
