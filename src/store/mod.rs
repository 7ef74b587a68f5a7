// src/store/mod.rs

//! Data access layer.
//!
//! Handlers only see the [`TriviaStore`] trait; the concrete store is chosen
//! once at startup and injected through `AppState`.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a [`TriviaStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("question {0} not found")]
    NotFound(i64),

    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared handle to whichever store the application was started with.
pub type SharedStore = Arc<dyn TriviaStore>;

/// Repository interface over the questions and categories tables.
///
/// Every method returning questions orders them by ascending id.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Inserts a question and returns it with its assigned id.
    async fn insert(&self, new: NewQuestion) -> StoreResult<Question>;

    /// Fails with [`StoreError::NotFound`] when no row was removed.
    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// Case-insensitive literal substring match against the question text.
    async fn search_by_text(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn list_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// All categories ordered by their type label.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Questions eligible for the next quiz turn: optionally restricted to one
    /// category, never one of `exclude`.
    async fn quiz_candidates(
        &self,
        category_id: Option<i64>,
        exclude: &[i64],
    ) -> StoreResult<Vec<Question>>;
}
