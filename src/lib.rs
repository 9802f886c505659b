//! AskRelay Telegram Bot
//!
//! A Telegram bot that relays anonymous questions to a single administrator.
//! Users send text, photos or videos; the administrator lists, inspects and
//! answers them, and the bot delivers each answer back to its submitter.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AskRelayError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::MessageRouter;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
