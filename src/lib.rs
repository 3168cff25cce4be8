//! EventHub
//!
//! A terminal application for browsing, filtering, creating, and RSVP-ing to
//! community events. All state lives in memory for the lifetime of the
//! session: an event store owns the canonical event list, the registration
//! set and the active filters; a view router owns the current page; and the
//! page layer renders text views and turns commands into store and router
//! operations.

pub mod app;
pub mod config;
pub mod forms;
pub mod models;
pub mod pages;
pub mod router;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use app::{App, Command};
pub use config::Settings;
pub use router::Router;
pub use store::EventStore;
pub use utils::errors::{EventHubError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
