//! The navigation state manager.
//!
//! [`NavigationState`] owns the active path, its derived breadcrumb trail,
//! a bounded sliding window of visited paths, and a transient mobile-menu
//! flag. It is created when the owning view mounts, updated synchronously
//! on every router path-change event, and discarded on unmount. It is
//! never shared across views and is not persisted.
//!
//! The manager never owns the real URL: navigation intents are forwarded
//! to a [`Router`] collaborator, whose subsequent path-change event drives
//! [`on_route_change`](NavigationState::on_route_change).

use std::collections::VecDeque;

use crate::breadcrumb::{generate_breadcrumbs, BreadcrumbItem};
use crate::config::Config;
use crate::router::Router;

/// Client-side navigation state: current path, derived breadcrumbs, and a
/// bounded history window.
///
/// All operations are synchronous and total — the manager performs no I/O
/// and cannot fail. Each mutation completes before control returns, so a
/// reader can never observe history and breadcrumbs out of sync.
///
/// # Examples
///
/// ```
/// use waypoint::{Config, NavigationState};
///
/// let mut state = NavigationState::new("/dashboard/leads", &Config::default());
/// assert_eq!(state.breadcrumbs().len(), 3);
/// assert_eq!(state.history().len(), 1);
///
/// state.on_route_change("/dashboard/buyers");
/// assert_eq!(state.current_path(), "/dashboard/buyers");
/// assert_eq!(state.history().len(), 2);
/// ```
#[derive(Debug)]
pub struct NavigationState {
    current_path: String,
    breadcrumbs: Vec<BreadcrumbItem>,
    history: VecDeque<String>,
    mobile_menu_open: bool,
    history_capacity: usize,
}

impl NavigationState {
    /// Create a navigation state seeded from the router's current path.
    ///
    /// History starts containing the initial path, so a deep-linked entry
    /// still has a well-defined soft-back target.
    #[must_use]
    pub fn new(initial_path: &str, config: &Config) -> Self {
        Self::with_capacity(initial_path, config.effective_history_capacity())
    }

    /// Create a navigation state with an explicit history window size.
    ///
    /// A capacity of zero is clamped to one; config validation rejects
    /// zero before it reaches this point.
    #[must_use]
    pub fn with_capacity(initial_path: &str, history_capacity: usize) -> Self {
        let history_capacity = history_capacity.max(1);
        let mut history = VecDeque::with_capacity(history_capacity);
        history.push_back(initial_path.to_string());

        Self {
            current_path: initial_path.to_string(),
            breadcrumbs: generate_breadcrumbs(initial_path),
            history,
            mobile_menu_open: false,
            history_capacity,
        }
    }

    /// The active route path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// The breadcrumb trail derived from the active path.
    #[must_use]
    pub fn breadcrumbs(&self) -> &[BreadcrumbItem] {
        &self.breadcrumbs
    }

    /// Visited paths, oldest first, bounded by the configured capacity.
    ///
    /// Consecutive duplicates are kept — every route-change event appends
    /// unconditionally.
    #[must_use]
    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }

    /// The history window size this state was created with.
    #[must_use]
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    /// Whether the mobile menu is currently open.
    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Apply a router path-change event.
    ///
    /// Sets the current path, appends it to history (evicting the oldest
    /// entry once the window is full), and recomputes the breadcrumb
    /// trail. All three effects are visible together when this returns.
    pub fn on_route_change(&mut self, new_path: &str) {
        log::debug!("route change: {} -> {new_path}", self.current_path);

        self.current_path = new_path.to_string();

        if self.history.len() >= self.history_capacity {
            if let Some(evicted) = self.history.pop_front() {
                log::debug!("history window full, evicted {evicted}");
            }
        }
        self.history.push_back(new_path.to_string());

        self.breadcrumbs = generate_breadcrumbs(&self.current_path);
    }

    /// Forward a navigation intent to the router.
    ///
    /// No state is mutated here and no validation is performed on `href`;
    /// the router's subsequent path-change event drives
    /// [`on_route_change`](NavigationState::on_route_change).
    pub fn navigate_to(&self, router: &mut dyn Router, href: &str) {
        router.navigate(href);
    }

    /// Soft back: navigate to the previously visited path.
    ///
    /// Uses the in-app history window rather than the router's own history
    /// stack, so it is well-defined even on deep-linked entry: with fewer
    /// than two entries the target is the root path.
    pub fn navigate_back(&self, router: &mut dyn Router) {
        let target = if self.history.len() > 1 {
            &self.history[self.history.len() - 2]
        } else {
            "/"
        };
        log::debug!("soft back -> {target}");
        router.navigate(target);
    }

    /// Flip the mobile-menu flag.
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Force the mobile menu closed. Idempotent.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Whether `href` is exactly the active path. No normalization is
    /// applied beyond what is already stored.
    #[must_use]
    pub fn is_current_path(&self, href: &str) -> bool {
        self.current_path == href
    }

    /// Whether `href` is a prefix of the active path.
    ///
    /// This is a plain string prefix match with no segment-boundary check:
    /// `"/"` is active for every path, and `"/dash"` matches
    /// `"/dashboard"`. The quirk is deliberate — menu highlighting relies
    /// on it.
    #[must_use]
    pub fn is_active_route(&self, href: &str) -> bool {
        self.current_path.starts_with(href)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::router::MockRouter;

    fn state_at(path: &str) -> NavigationState {
        NavigationState::new(path, &Config::default())
    }

    #[test]
    fn test_new_seeds_history_and_breadcrumbs() {
        let state = state_at("/dashboard/leads");
        assert_eq!(state.current_path(), "/dashboard/leads");
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0], "/dashboard/leads");
        assert_eq!(state.breadcrumbs().len(), 3);
        assert!(!state.is_mobile_menu_open());
    }

    #[test]
    fn test_route_change_updates_everything_together() {
        let mut state = state_at("/dashboard/leads");
        state.on_route_change("/dashboard/buyers");

        assert_eq!(state.current_path(), "/dashboard/buyers");
        assert_eq!(
            state.history().iter().collect::<Vec<_>>(),
            ["/dashboard/leads", "/dashboard/buyers"]
        );
        let trail = state.breadcrumbs();
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[2].href, "/dashboard/buyers");
        assert!(trail[2].is_active);
    }

    #[test]
    fn test_history_window_evicts_oldest() {
        let mut state = NavigationState::with_capacity("/p0", 10);
        for i in 1..=11 {
            state.on_route_change(&format!("/p{i}"));
        }

        assert_eq!(state.history().len(), 10);
        assert_eq!(state.history()[0], "/p2");
        assert_eq!(state.history()[9], "/p11");
    }

    #[test]
    fn test_history_keeps_consecutive_duplicates() {
        let mut state = state_at("/a");
        state.on_route_change("/a");
        state.on_route_change("/a");
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_custom_capacity_from_config() {
        let config = Config {
            history_capacity: Some(2),
            ..Default::default()
        };
        let mut state = NavigationState::new("/a", &config);
        state.on_route_change("/b");
        state.on_route_change("/c");
        assert_eq!(state.history().iter().collect::<Vec<_>>(), ["/b", "/c"]);
    }

    #[test]
    fn test_zero_capacity_clamped_to_one() {
        let mut state = NavigationState::with_capacity("/a", 0);
        state.on_route_change("/b");
        assert_eq!(state.history().iter().collect::<Vec<_>>(), ["/b"]);
    }

    #[test]
    fn test_navigate_to_forwards_verbatim() {
        let state = state_at("/");
        let mut router = MockRouter::new();
        router
            .expect_navigate()
            .with(eq("/dashboard?tab=2"))
            .times(1)
            .return_const(());
        state.navigate_to(&mut router, "/dashboard?tab=2");
    }

    #[test]
    fn test_navigate_back_targets_previous_entry() {
        let mut state = state_at("/dashboard/leads");
        state.on_route_change("/dashboard/buyers");

        let mut router = MockRouter::new();
        router
            .expect_navigate()
            .with(eq("/dashboard/leads"))
            .times(1)
            .return_const(());
        state.navigate_back(&mut router);
    }

    #[test]
    fn test_navigate_back_without_history_targets_root() {
        let state = state_at("/deep/link");
        let mut router = MockRouter::new();
        router
            .expect_navigate()
            .with(eq("/"))
            .times(1)
            .return_const(());
        state.navigate_back(&mut router);
    }

    #[test]
    fn test_navigate_back_does_not_mutate_state() {
        let mut state = state_at("/a");
        state.on_route_change("/b");
        let mut router = MockRouter::new();
        router.expect_navigate().return_const(());
        state.navigate_back(&mut router);

        // only the router's echo mutates state
        assert_eq!(state.current_path(), "/b");
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_mobile_menu_toggle_and_close() {
        let mut state = state_at("/");
        state.toggle_mobile_menu();
        assert!(state.is_mobile_menu_open());
        state.toggle_mobile_menu();
        assert!(!state.is_mobile_menu_open());

        state.toggle_mobile_menu();
        state.close_mobile_menu();
        assert!(!state.is_mobile_menu_open());
        state.close_mobile_menu();
        assert!(!state.is_mobile_menu_open());
    }

    #[test]
    fn test_menu_flag_survives_route_changes() {
        let mut state = state_at("/");
        state.toggle_mobile_menu();
        state.on_route_change("/dashboard");
        assert!(state.is_mobile_menu_open());
    }

    #[test]
    fn test_is_current_path_exact_match_only() {
        let state = state_at("/dashboard/leads");
        assert!(state.is_current_path("/dashboard/leads"));
        assert!(!state.is_current_path("/dashboard"));
        assert!(!state.is_current_path("/dashboard/leads/"));
    }

    #[test]
    fn test_is_active_route_prefix_match() {
        let state = state_at("/dashboard/leads");
        assert!(state.is_active_route("/"));
        assert!(state.is_active_route("/dashboard"));
        assert!(state.is_active_route("/dashboard/leads"));
        assert!(!state.is_active_route("/analytics"));
    }

    #[test]
    fn test_is_active_route_has_no_segment_boundary() {
        // documented quirk: a bare prefix matches across segment boundaries
        let state = state_at("/dashboard-other");
        assert!(state.is_active_route("/dash"));
    }
}
