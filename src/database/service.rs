//! Database service layer
//!
//! This module provides a high-level interface to database operations

use std::sync::Arc;
use crate::database::{DatabasePool, QuestionRepository, QuestionStore};
use crate::utils::errors::AskRelayError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub questions: QuestionRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            questions: QuestionRepository::new(pool.clone()),
            pool,
        }
    }

    /// Question store handed to handlers
    pub fn question_store(&self) -> Arc<dyn QuestionStore> {
        Arc::new(self.questions.clone())
    }

    /// Check that the database still answers queries
    pub async fn health_check(&self) -> Result<(), AskRelayError> {
        super::connection::health_check(&self.pool).await
    }
}
