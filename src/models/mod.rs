//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod question;
pub mod message;

// Re-export commonly used models
pub use question::{Question, MediaType, AnswerConflict};
pub use message::{IncomingMessage, Attachment, CommandInvocation};
