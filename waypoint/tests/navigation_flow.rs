//! End-to-end navigation flows through the router event loop.

mod common;

use common::SessionFixture;

/// The full mount -> navigate -> soft-back scenario.
#[test]
fn test_dashboard_session_flow() {
    let mut session = SessionFixture::new().starting_at("/dashboard/leads").build();

    // mounted state
    let trail = session.state.breadcrumbs();
    assert_eq!(trail.len(), 3);
    assert_eq!(trail[0].href, "/");
    assert!(!trail[0].is_active);
    assert_eq!(trail[1].href, "/dashboard");
    assert!(!trail[1].is_active);
    assert_eq!(trail[2].href, "/dashboard/leads");
    assert!(trail[2].is_active);
    assert_eq!(
        session.state.history().iter().collect::<Vec<_>>(),
        ["/dashboard/leads"]
    );

    // navigate to a sibling route
    session.go("/dashboard/buyers");
    let trail = session.state.breadcrumbs();
    assert_eq!(trail[2].href, "/dashboard/buyers");
    assert_eq!(trail[2].label, "buyers");
    assert!(trail[2].is_active);
    assert_eq!(
        session.state.history().iter().collect::<Vec<_>>(),
        ["/dashboard/leads", "/dashboard/buyers"]
    );

    // soft back returns to the previous entry
    session.back();
    assert_eq!(session.state.current_path(), "/dashboard/leads");
}

/// After 12 route changes the window holds exactly the last 10 paths,
/// oldest first.
#[test]
fn test_history_window_bound() {
    let mut session = SessionFixture::new().starting_at("/start").build();
    for i in 1..=12 {
        session.go(&format!("/page-{i}"));
    }

    let history: Vec<_> = session.state.history().iter().cloned().collect();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0], "/page-3");
    assert_eq!(history[9], "/page-12");
}

/// Soft back on a deep-linked entry (single-entry history) targets root.
#[test]
fn test_soft_back_on_deep_link() {
    let mut session = SessionFixture::new()
        .starting_at("/transactions/escrow-42")
        .build();

    session.back();
    assert_eq!(session.state.current_path(), "/");
    assert_eq!(session.state.breadcrumbs().len(), 1);
}

/// Soft back after the previous entry was evicted still uses the window.
#[test]
fn test_soft_back_uses_window_not_full_history() {
    let mut session = SessionFixture::new()
        .starting_at("/a")
        .with_capacity(3)
        .build();
    session.go("/b");
    session.go("/c");
    session.go("/d"); // window is now [b, c, d]

    session.back();
    assert_eq!(session.state.current_path(), "/c");
}

/// Repeated navigation to the same path accumulates history entries.
#[test]
fn test_duplicate_visits_accumulate() {
    let mut session = SessionFixture::new()
        .starting_at("/dashboard")
        .visiting("/dashboard")
        .visiting("/dashboard")
        .build();

    assert_eq!(session.state.history().len(), 3);
}

/// Route-comparison queries across a session.
#[test]
fn test_route_queries() {
    let mut session = SessionFixture::new().starting_at("/").build();
    session.go("/dashboard/leads");

    assert!(session.state.is_current_path("/dashboard/leads"));
    assert!(!session.state.is_current_path("/dashboard"));

    assert!(session.state.is_active_route("/"));
    assert!(session.state.is_active_route("/dashboard"));
    assert!(!session.state.is_active_route("/analytics"));

    session.go("/analytics");
    assert!(session.state.is_active_route("/analytics"));
    assert!(!session.state.is_active_route("/dashboard"));
    // root prefix matches any current path
    assert!(session.state.is_active_route("/"));
}

/// The menu flag is independent of routing.
#[test]
fn test_menu_flag_independent_of_routing() {
    let mut session = SessionFixture::new().starting_at("/").build();

    session.state.toggle_mobile_menu();
    session.go("/dashboard");
    assert!(session.state.is_mobile_menu_open());

    session.state.close_mobile_menu();
    session.state.close_mobile_menu();
    assert!(!session.state.is_mobile_menu_open());
}

/// Two router events queued before a read: only the net effect is visible,
/// with both paths in history in order.
#[test]
fn test_queued_events_apply_in_order() {
    let mut session = SessionFixture::new().starting_at("/").build();

    session.state.navigate_to(&mut session.router, "/first");
    session.state.navigate_to(&mut session.router, "/second");
    assert_eq!(session.pump(), 2);

    assert_eq!(session.state.current_path(), "/second");
    assert_eq!(
        session.state.history().iter().collect::<Vec<_>>(),
        ["/", "/first", "/second"]
    );
}
