//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Triggers:
//!     RouterLink activation / Navigate directive / application code
//!         → controller.navigate(target, replace)
//!     host back/forward
//!         → controller.handle_location_changed()
//!     page load
//!         → controller.start()
//!
//! Each trigger:
//!     → location.rs (resolve target)
//!     → history.rs (push / replace, or read current entry)
//!     → routing (evaluate table, parse query)
//!     → state.rs (update in place)
//!     → event.rs (publish to subscribers)
//! ```
//!
//! # Design Decisions
//! - Single-threaded, run-to-completion; nothing is queued or deferred
//! - State and history are injected, so independent controllers never interfere

pub mod controller;
pub mod event;
pub mod history;
pub mod link;
pub mod location;
pub mod state;

pub use controller::{NavigationController, SubscriptionId};
pub use event::{Dispatch, NavigationEvent, Trigger, ROUTE_CHANGE_EVENT};
pub use history::{History, MemoryHistory};
pub use link::{Activation, LinkDisposition, Modifiers, MouseButton, Navigate, RouterLink};
pub use location::{resolve_target, Location};
pub use state::{NavigationState, StateHandle};
