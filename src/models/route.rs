//! Route model
//!
//! The current page identity plus navigation parameters. Routes are replaced
//! wholesale on every navigation; there is no history stack.

use serde::{Deserialize, Serialize};

use super::event::EventId;

/// The four pages of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    Detail,
    Create,
    MyEvents,
}

impl Page {
    /// Parse a page name from user input
    ///
    /// Anything outside the four known names falls back to `Home`, an
    /// intentional default rather than an error.
    pub fn parse(input: &str) -> Page {
        match input.trim().to_lowercase().as_str() {
            "home" => Page::Home,
            "detail" => Page::Detail,
            "create" => Page::Create,
            "myevents" | "my" => Page::MyEvents,
            _ => Page::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Detail => "detail",
            Page::Create => "create",
            Page::MyEvents => "myevents",
        }
    }
}

/// Navigation parameters carried by a route
///
/// `event_id` is the only key in use; the detail page consumes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    pub event_id: Option<EventId>,
}

impl RouteParams {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn for_event(event_id: EventId) -> Self {
        Self {
            event_id: Some(event_id),
        }
    }
}

/// The current route: page identity plus parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub page: Page,
    pub params: RouteParams,
}

impl Route {
    pub fn home() -> Self {
        Self::default()
    }
}
