//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the AskRelay application.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{AskRelayError, Result};

/// Initialize logging based on configuration
///
/// When a log directory is configured, a daily rolling file is written next to
/// stdout. The returned guard flushes that file and must live until shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| AskRelayError::Config(format!("Invalid log filter: {}", e)))?;

    let file_path = config.file_path.as_deref().filter(|p| !p.is_empty());

    let guard = match file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "askrelay.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
                .try_init()
                .map_err(|e| AskRelayError::Config(format!("Failed to install logger: {}", e)))?;

            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .try_init()
                .map_err(|e| AskRelayError::Config(format!("Failed to install logger: {}", e)))?;

            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a question submission
pub fn log_submission(user_id: i64, question_id: i64, media_type: &str) {
    info!(
        user_id = user_id,
        question_id = question_id,
        media_type = media_type,
        "Question submitted"
    );
}

/// Log admin actions
pub fn log_admin_action(admin_id: i64, action: &str, question_id: Option<i64>) {
    info!(
        admin_id = admin_id,
        action = action,
        question_id = question_id,
        "Admin action performed"
    );
}

/// Log a failed delivery to a chat
pub fn log_delivery_failure(chat_id: i64, purpose: &str, error: &AskRelayError) {
    warn!(
        chat_id = chat_id,
        purpose = purpose,
        error = %error,
        "Failed to deliver message"
    );
}

/// Log an error returned by a command handler
pub fn log_command_error(command: &str, user_id: i64, error: &AskRelayError) {
    match error.severity() {
        crate::utils::errors::ErrorSeverity::Info => {
            debug!(command = command, user_id = user_id, error = %error, "Command rejected");
        }
        crate::utils::errors::ErrorSeverity::Warning => {
            warn!(command = command, user_id = user_id, error = %error, "Command rejected");
        }
        _ => {
            error!(command = command, user_id = user_id, error = %error, "Command failed");
        }
    }
}
