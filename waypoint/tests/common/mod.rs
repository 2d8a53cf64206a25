//! Shared test fixtures for navigation integration tests.

use waypoint::{MemoryRouter, NavigationState, DEFAULT_HISTORY_CAPACITY};

/// A navigation state wired to an in-process router.
pub struct Session {
    pub state: NavigationState,
    pub router: MemoryRouter,
}

impl Session {
    /// Drain every pending router event into the navigation state, in
    /// order, returning how many events were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(path) = self.router.poll_change() {
            self.state.on_route_change(&path);
            applied += 1;
        }
        applied
    }

    /// Issue a navigation intent and apply the router's echo.
    pub fn go(&mut self, href: &str) {
        self.state.navigate_to(&mut self.router, href);
        self.pump();
    }

    /// Issue a soft back and apply the router's echo.
    pub fn back(&mut self) {
        self.state.navigate_back(&mut self.router);
        self.pump();
    }
}

/// Builder for navigation sessions.
pub struct SessionFixture {
    start: String,
    capacity: usize,
    visits: Vec<String>,
}

impl SessionFixture {
    pub fn new() -> Self {
        Self {
            start: "/".to_string(),
            capacity: DEFAULT_HISTORY_CAPACITY,
            visits: Vec::new(),
        }
    }

    pub fn starting_at(mut self, path: &str) -> Self {
        self.start = path.to_string();
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn visiting(mut self, path: &str) -> Self {
        self.visits.push(path.to_string());
        self
    }

    pub fn build(self) -> Session {
        let mut session = Session {
            state: NavigationState::with_capacity(&self.start, self.capacity),
            router: MemoryRouter::new(self.start.as_str()),
        };
        for path in &self.visits {
            session.go(path);
        }
        session
    }
}

impl Default for SessionFixture {
    fn default() -> Self {
        Self::new()
    }
}
