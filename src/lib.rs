//! Client-side router engine.
//!
//! Compiles route patterns into a first-match-wins table, extracts path and
//! query parameters, and keeps a navigation state in sync with a history
//! mechanism, publishing an event after every navigation.

pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use navigation::{NavigationController, NavigationEvent, StateHandle};
pub use routing::{match_route, normalize_path, parse_query, RouteTable};
