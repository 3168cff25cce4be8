//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod filter;
pub mod route;

// Re-export commonly used models
pub use event::{Event, EventDraft, EventId, EventType, DEFAULT_EVENT_IMAGE};
pub use filter::{FilterCriteria, TypeFilter};
pub use route::{Page, Route, RouteParams};
