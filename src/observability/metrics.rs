//! Router metrics.
//!
//! # Metrics
//! - `router_navigations_total` (counter): navigations by trigger
//! - `router_route_outcomes_total` (counter): evaluations by outcome (matched, fallback, none)
//! - `router_malformed_patterns_total` (counter): route-table patterns with an empty parameter name
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the host installs a recorder (or none)
//! - Without a recorder every call is a no-op

use metrics::counter;

/// Record a navigation by what triggered it.
pub fn record_navigation(trigger: &'static str) {
    counter!("router_navigations_total", "trigger" => trigger).increment(1);
}

/// Record which kind of content an evaluation selected.
pub fn record_route_outcome(outcome: &'static str) {
    counter!("router_route_outcomes_total", "outcome" => outcome).increment(1);
}

pub fn record_malformed_pattern() {
    counter!("router_malformed_patterns_total").increment(1);
}
