//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod question;

// Re-export repositories
pub use question::QuestionRepository;
