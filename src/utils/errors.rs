//! Error handling for EventHub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.
//!
//! Store operations deliberately stay total (`bool` / `Option`): a missing
//! event or a full event is an ordinary state the views render, not an error.
//! These error types cover the edges around the core: configuration, command
//! input, and I/O.

use thiserror::Error;

/// Main error type for the EventHub application
#[derive(Error, Debug)]
pub enum EventHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for EventHub operations
pub type Result<T> = std::result::Result<T, EventHubError>;

impl EventHubError {
    /// Check if the error is recoverable
    ///
    /// Recoverable errors are reported to the user and the session continues;
    /// the rest abort startup.
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventHubError::Config(_) => false,
            EventHubError::InvalidInput(_) => true,
            EventHubError::EventNotFound { .. } => true,
            EventHubError::Serialization(_) => true,
            EventHubError::Io(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        assert!(!EventHubError::Config("missing".to_string()).is_recoverable());
        assert!(EventHubError::InvalidInput("bad command".to_string()).is_recoverable());
        assert!(EventHubError::EventNotFound { event_id: 42 }.is_recoverable());
    }

    #[test]
    fn test_display() {
        let err = EventHubError::EventNotFound { event_id: 7 };
        assert_eq!(err.to_string(), "Event not found: 7");
    }
}
