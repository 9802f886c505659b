//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    pub generation: GenerationConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// The only user allowed to run /answer, /list and /media
    pub admin_id: i64,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Text generation service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_seconds: u64,
    pub proxy_url: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
}

impl GenerationConfig {
    /// Configured proxy URL, treating an empty value as "no proxy"
    pub fn proxy(&self) -> Option<&str> {
        self.proxy_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

impl Settings {
    /// Load settings from defaults, an optional `config.toml` and
    /// `ASKRELAY_`-prefixed environment variables (`__` separates sections)
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("bot.admin_id", defaults.bot.admin_id)?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", i64::from(defaults.database.max_connections))?
            .set_default("generation.api_url", defaults.generation.api_url)?
            .set_default("generation.api_key", defaults.generation.api_key)?
            .set_default("generation.model", defaults.generation.model)?
            .set_default("generation.max_tokens", i64::from(defaults.generation.max_tokens))?
            .set_default("generation.temperature", defaults.generation.temperature)?
            .set_default("generation.timeout_seconds", defaults.generation.timeout_seconds as i64)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("ASKRELAY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AskRelayError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                admin_id: 0,
            },
            database: DatabaseConfig {
                url: "sqlite://askrelay.db".to_string(),
                max_connections: 5,
            },
            generation: GenerationConfig {
                api_url: "https://api.cohere.ai/generate".to_string(),
                api_key: String::new(),
                model: "command-xlarge-nightly".to_string(),
                max_tokens: 512,
                temperature: 0.7,
                timeout_seconds: 30,
                proxy_url: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.database.url.starts_with("sqlite://"));
        assert_eq!(settings.generation.max_tokens, 512);
        assert!(settings.generation.proxy().is_none());
    }

    #[test]
    fn test_empty_proxy_means_none() {
        let mut settings = Settings::default();
        settings.generation.proxy_url = Some("   ".to_string());
        assert!(settings.generation.proxy().is_none());

        settings.generation.proxy_url = Some("http://127.0.0.1:3128".to_string());
        assert_eq!(settings.generation.proxy(), Some("http://127.0.0.1:3128"));
    }
}
