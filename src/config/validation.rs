//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{AskRelayError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_database_config(&settings.database)?;
    validate_generation_config(&settings.generation)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(AskRelayError::Config(
            "Bot token is required".to_string()
        ));
    }

    if config.admin_id <= 0 {
        return Err(AskRelayError::Config(
            "Admin ID must be a positive Telegram user ID".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(AskRelayError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(AskRelayError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate text generation configuration
fn validate_generation_config(config: &super::GenerationConfig) -> Result<()> {
    url::Url::parse(&config.api_url)?;

    if let Some(proxy) = config.proxy() {
        url::Url::parse(proxy).map_err(|e| {
            AskRelayError::Config(format!("Invalid proxy URL '{}': {}", proxy, e))
        })?;
    }

    if !(0.0..=5.0).contains(&config.temperature) {
        return Err(AskRelayError::Config(
            format!("Temperature must be within 0.0..=5.0, got {}", config.temperature)
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(AskRelayError::Config(
            "Generation timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AskRelayError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AskRelayError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
