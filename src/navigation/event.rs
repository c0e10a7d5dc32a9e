//! Navigation events published after every path change.

use serde::Serialize;

use crate::routing::{QueryParams, RouteParams};

/// Name under which route changes are announced to the rendering layer.
pub const ROUTE_CHANGE_EVENT: &str = "shtml:routechange";

/// What caused a re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// First evaluation against the starting location.
    Initial,
    /// Programmatic `navigate` that added a history entry.
    Push,
    /// Programmatic `navigate` that replaced the current entry.
    Replace,
    /// Back/forward: the host's location changed underneath us.
    LocationChanged,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Initial => "initial",
            Trigger::Push => "push",
            Trigger::Replace => "replace",
            Trigger::LocationChanged => "location_changed",
        }
    }
}

/// The record delivered to subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationEvent {
    pub path: String,
    pub params: RouteParams,
    pub query: QueryParams,
}

impl NavigationEvent {
    /// Name the event is dispatched under.
    pub fn name(&self) -> &'static str {
        ROUTE_CHANGE_EVENT
    }
}

/// An event as dispatched to the host: its name plus the record as `detail`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Dispatch<'a> {
    pub event: &'static str,
    pub detail: &'a NavigationEvent,
}

impl<'a> From<&'a NavigationEvent> for Dispatch<'a> {
    fn from(detail: &'a NavigationEvent) -> Self {
        Self {
            event: detail.name(),
            detail,
        }
    }
}
