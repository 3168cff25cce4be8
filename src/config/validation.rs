//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{EventHubError, Result};

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_app_config(&settings.app)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate general application configuration
fn validate_app_config(config: &super::AppConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(EventHubError::Config(
            "Application name is required".to_string(),
        ));
    }

    if config.events_per_page == 0 {
        return Err(EventHubError::Config(
            "Events per page must be greater than 0".to_string(),
        ));
    }

    if config.events_per_page > 50 {
        return Err(EventHubError::Config(
            "Events per page must be at most 50".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventHubError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventHubError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
