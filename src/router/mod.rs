//! View router
//!
//! Holds the identity of the currently displayed page and per-navigation
//! parameters. Independent of the event store; owns nothing else.

use tracing::debug;

use crate::models::{Page, Route, RouteParams};

/// The client-side router: one current route, replaced on every navigation
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    /// Create a router positioned on the home page with empty params
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_route(&self) -> &Route {
        &self.current
    }

    pub fn page(&self) -> Page {
        self.current.page
    }

    /// Unconditional transition to `(page, params)`
    ///
    /// The previous route is replaced, not merged; params never survive a
    /// navigation they were not passed to.
    pub fn navigate(&mut self, page: Page, params: RouteParams) {
        debug!(from = self.current.page.as_str(), to = page.as_str(), "Navigating");
        self.current = Route { page, params };
    }
}
