//! Question persistence contract
//!
//! Handlers only see `dyn QuestionStore`; the SQLite repository is the
//! production implementation and tests substitute in-memory fakes.

use async_trait::async_trait;
use crate::models::Question;
use crate::utils::errors::Result;

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Insert a new question and write the assigned id back into it
    async fn create(&self, question: &mut Question) -> Result<i64>;

    /// Fails with `QuestionNotFound` when no row has this id
    async fn fetch_by_id(&self, id: i64) -> Result<Question>;

    /// All questions in insertion order
    async fn fetch_all(&self) -> Result<Vec<Question>>;

    /// Most recently assigned id; `EmptyStore` when nothing was created yet
    async fn last_id(&self) -> Result<i64>;

    /// Persist `answered` and `answer` for `question.id`.
    ///
    /// Does not check whether the stored question was already answered.
    async fn update(&self, question: &Question) -> Result<()>;
}
