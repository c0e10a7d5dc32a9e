//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at construction):
//!     (pattern, handle)[]
//!     → pattern.rs (normalize, split into literal/param/wildcard segments)
//!     → Freeze as immutable RouteTable
//!
//! Evaluation (every navigation):
//!     path
//!     → router.rs (scan routes in registration order)
//!     → matcher.rs (match one compiled pattern, decode params)
//!     → Return: first match, fallback, or nothing active
//!
//! search
//!     → query.rs (decode pairs, promote repeated keys to lists)
//! ```
//!
//! # Design Decisions
//! - Patterns compiled once, never re-parsed per navigation
//! - Results are recomputed on every navigation, never cached by path
//! - First match wins (registration order, not specificity)
//! - Only parameter values and query pairs are percent-decoded

pub mod decode;
pub mod matcher;
pub mod pattern;
pub mod query;
pub mod router;

pub use matcher::{match_route, MatchResult, Matcher, RouteParams};
pub use pattern::{normalize_path, RoutePattern, Segment};
pub use query::{parse_query, QueryParams, QueryValue};
pub use router::{Evaluation, Route, RouteOutcome, RouteTable, RouteTableBuilder};
