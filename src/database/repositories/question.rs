//! Question repository implementation

use async_trait::async_trait;
use sqlx::SqlitePool;
use crate::database::store::QuestionStore;
use crate::models::Question;
use crate::utils::errors::{AskRelayError, Result};

const QUESTION_COLUMNS: &str = "id, user_id, username, text, file_id, media_type, answered, answer";

#[derive(Clone)]
#[derive(Debug)]
pub struct QuestionRepository {
    pool: SqlitePool,
}

impl QuestionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for QuestionRepository {
    async fn create(&self, question: &mut Question) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (user_id, username, text, file_id, media_type, answered, answer)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(question.user_id)
        .bind(&question.username)
        .bind(&question.text)
        .bind(&question.file_id)
        .bind(&question.media_type)
        .bind(question.answered)
        .bind(&question.answer)
        .execute(&self.pool)
        .await?;

        question.id = result.last_insert_rowid();
        Ok(question.id)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            &format!("SELECT {} FROM questions WHERE id = ?", QUESTION_COLUMNS)
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        question.ok_or(AskRelayError::QuestionNotFound { question_id: id })
    }

    async fn fetch_all(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            &format!("SELECT {} FROM questions ORDER BY id ASC", QUESTION_COLUMNS)
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn last_id(&self) -> Result<i64> {
        let last: (Option<i64>,) = sqlx::query_as("SELECT MAX(id) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        last.0.ok_or(AskRelayError::EmptyStore)
    }

    async fn update(&self, question: &Question) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE questions
            SET answered = ?, answer = ?
            WHERE id = ?
            "#
        )
        .bind(question.answered)
        .bind(&question.answer)
        .bind(question.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AskRelayError::QuestionNotFound { question_id: question.id });
        }

        Ok(())
    }
}
