//! Error handling for AskRelay
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy. Every variant maps to a
//! reply text via [`AskRelayError::user_message`], which is what the command
//! dispatcher sends back when a handler fails.

use thiserror::Error;

/// Generic reply used whenever the underlying failure must not leak to users
pub const GENERIC_FAILURE_TEXT: &str =
    "Something went wrong while processing your request. Please try again later.";

/// Reply for non-admin users invoking a privileged command
pub const ACCESS_DENIED_TEXT: &str = "You do not have access to this command.";

/// Main error type for AskRelay application
#[derive(Error, Debug)]
pub enum AskRelayError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Text generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Permission denied for user {user_id}")]
    PermissionDenied { user_id: i64 },

    #[error("Question not found: {question_id}")]
    QuestionNotFound { question_id: i64 },

    #[error("Question {question_id} has already been answered")]
    AlreadyAnswered { question_id: i64 },

    #[error("No questions have been stored yet")]
    EmptyStore,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Text generation service specific errors
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("request timed out")]
    Timeout,

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("service returned an empty text")]
    EmptyResponse,
}

/// Result type alias for AskRelay operations
pub type Result<T> = std::result::Result<T, AskRelayError>;

/// Result type alias for text generation operations
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

impl AskRelayError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AskRelayError::Database(_) => ErrorSeverity::Critical,
            AskRelayError::Migration(_) => ErrorSeverity::Critical,
            AskRelayError::Config(_) | AskRelayError::ConfigLoad(_) => ErrorSeverity::Critical,
            AskRelayError::PermissionDenied { .. } => ErrorSeverity::Warning,
            AskRelayError::AlreadyAnswered { .. } => ErrorSeverity::Warning,
            AskRelayError::QuestionNotFound { .. } => ErrorSeverity::Info,
            AskRelayError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Text sent to the user whose command failed with this error
    pub fn user_message(&self) -> String {
        match self {
            AskRelayError::InvalidInput(usage) => usage.clone(),
            AskRelayError::PermissionDenied { .. } => ACCESS_DENIED_TEXT.to_string(),
            AskRelayError::QuestionNotFound { question_id } => {
                format!("Question #{} not found.", question_id)
            }
            AskRelayError::AlreadyAnswered { question_id } => {
                format!("Question #{} has already been answered.", question_id)
            }
            AskRelayError::Generation(e) => format!("Text generation failed: {}", e),
            _ => GENERIC_FAILURE_TEXT.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
