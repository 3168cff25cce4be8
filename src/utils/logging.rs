//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EventHub application.
//!
//! Rendered pages go to stdout, so the stdout log layer is off by default and
//! file output is the primary sink.

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// Returns the appender guard; the caller must keep it alive for the process
/// lifetime or buffered log lines are lost on exit.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::new(&config.level);

    let mut guard = None;
    let file_layer = if config.file_path.is_empty() {
        None
    } else {
        let file_appender = tracing_appender::rolling::daily(&config.file_path, "eventhub.log");
        let (non_blocking, g) = tracing_appender::non_blocking(file_appender);
        guard = Some(g);
        Some(tracing_subscriber::fmt::layer().with_writer(non_blocking))
    };
    let stdout_layer = if config.stdout {
        Some(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a user command with the page it was issued from
pub fn log_command(page: &str, input: &str) {
    debug!(page = page, input = input, "User command received");
}

/// Log a store mutation outcome
pub fn log_store_mutation(operation: &str, event_id: Option<i64>, applied: bool) {
    info!(
        operation = operation,
        event_id = event_id,
        applied = applied,
        "Store mutation"
    );
}
