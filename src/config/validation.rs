//! Configuration validation module
//!
//! This module provides validation functions for application configuration.
//! Note that an empty bot token is not a validation error: the webhook
//! degrades to a diagnostic response instead of refusing to start.

use super::Settings;
use crate::utils::errors::EcoChefError;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<(), EcoChefError> {
    validate_bot_config(&settings.bot)?;
    validate_server_config(&settings.server)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<(), EcoChefError> {
    if config.api_base.is_empty() {
        return Err(EcoChefError::Config(
            "Telegram API base URL is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate webhook server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<(), EcoChefError> {
    if config.host.is_empty() {
        return Err(EcoChefError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(EcoChefError::Config(
            "Server port must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<(), EcoChefError> {
    if config.level.is_empty() {
        return Err(EcoChefError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EcoChefError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
