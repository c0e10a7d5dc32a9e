//! Shared helpers for integration tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use spa_router::config::{RouteConfig, RouterConfig};
use spa_router::navigation::{MemoryHistory, NavigationController, StateHandle};
use spa_router::routing::RouteOutcome;

/// Config for a small site with a fallback.
#[allow(dead_code)]
pub fn site_config() -> RouterConfig {
    RouterConfig {
        origin: "https://example.com".into(),
        routes: vec![
            RouteConfig::new("/", "home"),
            RouteConfig::new("/about", "about"),
            RouteConfig::new("/users/me", "me"),
            RouteConfig::new("/users/:id", "user"),
            RouteConfig::new("/users/:id/posts/:post", "post"),
            RouteConfig::new("/blog/*", "blog"),
        ],
        fallback: Some("not-found".into()),
        ..RouterConfig::default()
    }
}

/// Controller over `config`, starting at `start`, with its own state.
#[allow(dead_code)]
pub fn controller_for(
    config: &RouterConfig,
    start: &str,
) -> NavigationController<String, MemoryHistory> {
    let origin = config.origin_url().unwrap();
    NavigationController::new(
        Arc::new(config.build_table()),
        MemoryHistory::starting_at(start),
        &origin,
        StateHandle::new(),
    )
}

/// What the rendering layer would show after each navigation.
pub type Visible = Rc<RefCell<Vec<(RouteOutcome, Option<String>)>>>;

/// Subscribe a recorder of visible content.
#[allow(dead_code)]
pub fn record_visible(controller: &mut NavigationController<String, MemoryHistory>) -> Visible {
    let visible: Visible = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&visible);
    controller.subscribe(move |_, eval| {
        sink.borrow_mut()
            .push((eval.outcome(), eval.active_handle.cloned()));
    });
    visible
}
