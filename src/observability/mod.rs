//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + navigation produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (navigation and outcome counters)
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, pattern, outcome) rather than formatted strings
//! - Metrics are cheap (no-op without a recorder)

pub mod logging;
pub mod metrics;
