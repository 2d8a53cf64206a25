//! The router collaborator boundary.
//!
//! The navigation state manager never owns the real URL or history stack;
//! an external router does. This module defines the [`Router`] trait that
//! marks that seam, plus [`MemoryRouter`], an in-process implementation
//! used by tests, demos, and the CLI replay loop.

use std::collections::VecDeque;

/// The external subsystem that owns the actual path and history stack.
///
/// Navigation state only observes the router's path and issues navigation
/// commands to it; the router's subsequent path-change events drive
/// [`NavigationState::on_route_change`](crate::NavigationState::on_route_change).
/// `navigate` always has push semantics — implementations must not silently
/// replace the current entry.
#[cfg_attr(test, mockall::automock)]
pub trait Router {
    /// The router's notion of the active path.
    fn current_path(&self) -> &str;

    /// Command the router to change its path. No validation is performed on
    /// `href`; unroutable paths are the router's concern.
    fn navigate(&mut self, href: &str);
}

/// An in-process router backed by a queue of pending path-change events.
///
/// `navigate` updates the current path immediately and queues a
/// path-change event; the embedding event loop drains events with
/// [`poll_change`](MemoryRouter::poll_change) and feeds each one to the
/// navigation state, in order. Events are never reordered, debounced, or
/// de-duplicated.
///
/// # Examples
///
/// ```
/// use waypoint::{MemoryRouter, Router};
///
/// let mut router = MemoryRouter::new("/dashboard");
/// router.navigate("/dashboard/leads");
/// assert_eq!(router.current_path(), "/dashboard/leads");
/// assert_eq!(router.poll_change().as_deref(), Some("/dashboard/leads"));
/// assert_eq!(router.poll_change(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryRouter {
    current_path: String,
    pending: VecDeque<String>,
}

impl MemoryRouter {
    /// Create a router positioned at `initial_path`. No path-change event
    /// is queued for the initial position.
    #[must_use]
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            current_path: initial_path.into(),
            pending: VecDeque::new(),
        }
    }

    /// Pop the oldest pending path-change event, if any.
    pub fn poll_change(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    /// Whether any path-change events are waiting to be drained.
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> &str {
        &self.current_path
    }

    fn navigate(&mut self, href: &str) {
        self.current_path = href.to_string();
        self.pending.push_back(href.to_string());
    }
}
