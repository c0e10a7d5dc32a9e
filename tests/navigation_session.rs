//! End-to-end navigation sessions on an in-memory history.

use spa_router::navigation::{Activation, History, LinkDisposition, Navigate, RouterLink};
use spa_router::routing::{QueryValue, RouteOutcome};

mod common;

#[test]
fn test_navigate_is_observable_immediately() {
    let config = common::site_config();
    let mut controller = common::controller_for(&config, "/");

    controller.navigate("/about", false);
    assert_eq!(controller.state().current_path().as_deref(), Some("/about"));
    assert_eq!(controller.current().unwrap().path, "/about");
}

#[test]
fn test_full_session() {
    let config = common::site_config();
    let mut controller = common::controller_for(&config, "/users/42?tab=posts&tab=likes");
    let visible = common::record_visible(&mut controller);

    let initial = controller.start();
    assert_eq!(initial.params["id"], "42");
    assert_eq!(
        initial.query["tab"],
        QueryValue::Multiple(vec!["posts".into(), "likes".into()])
    );

    controller.navigate("/blog/2024/hello", false);
    controller.navigate("nowhere", false);
    controller.back();
    controller.back();

    let seen: Vec<_> = visible
        .borrow()
        .iter()
        .map(|(outcome, content)| (*outcome, content.clone().unwrap_or_default()))
        .collect();
    assert_eq!(
        seen,
        vec![
            (RouteOutcome::Matched, "user".to_string()),
            (RouteOutcome::Matched, "blog".to_string()),
            (RouteOutcome::Fallback, "not-found".to_string()),
            (RouteOutcome::Matched, "blog".to_string()),
            (RouteOutcome::Matched, "user".to_string()),
        ]
    );

    // Back restored the query of the original entry too
    let state = controller.state().snapshot().unwrap();
    assert_eq!(state.path, "/users/42");
    assert_eq!(state.query["tab"].all(), vec!["posts", "likes"]);
}

#[test]
fn test_no_fallback_means_nothing_visible() {
    let mut config = common::site_config();
    config.fallback = None;
    let mut controller = common::controller_for(&config, "/");
    let visible = common::record_visible(&mut controller);

    let event = controller.navigate("/does/not/exist", false);
    assert_eq!(event.path, "/does/not/exist");
    assert!(event.params.is_empty());
    assert_eq!(visible.borrow()[0], (RouteOutcome::None, None));
}

#[test]
fn test_independent_controllers_do_not_share_state() {
    let config = common::site_config();
    let mut first = common::controller_for(&config, "/");
    let mut second = common::controller_for(&config, "/");

    first.navigate("/about", false);
    second.navigate("/users/1", false);

    assert_eq!(first.state().current_path().as_deref(), Some("/about"));
    assert_eq!(second.state().current_path().as_deref(), Some("/users/1"));
}

#[test]
fn test_links_and_directives() {
    let config = common::site_config();
    let mut controller = common::controller_for(&config, "/");
    controller.start();

    let link = RouterLink::new("/about");
    assert!(matches!(
        link.activate(&mut controller, Activation::primary()),
        LinkDisposition::Intercepted(_)
    ));
    assert_eq!(controller.history().len(), 2);

    // Redirect replaces the entry the link just created
    Navigate::to("/users/me").replacing().apply(&mut controller);
    assert_eq!(controller.history().len(), 2);
    assert_eq!(controller.history().current_location().path, "/users/me");

    controller.back();
    assert_eq!(controller.state().current_path().as_deref(), Some("/"));
}

#[test]
fn test_targets_resolve_against_origin() {
    let config = common::site_config();
    let mut controller = common::controller_for(&config, "/");

    let event = controller.navigate("https://example.com/users/5/?x=%20y", false);
    assert_eq!(event.path, "/users/5");
    assert_eq!(event.params["id"], "5");
    assert_eq!(event.query["x"].first(), " y");
}
