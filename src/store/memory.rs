// src/store/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, StoreResult, TriviaStore};
use crate::models::{
    category::{Category, DEFAULT_CATEGORIES},
    question::{NewQuestion, Question},
};

/// In-process store with the same contract as the PostgreSQL schema.
///
/// Used when no `DATABASE_URL` is configured, and by the test suite.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    last_id: i64,
    // BTreeMap keeps iteration in ascending id order.
    questions: BTreeMap<i64, Question>,
    categories: Vec<Category>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding only the default categories, ids 1..=6.
    pub fn with_default_categories() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category {
                id,
                kind: kind.to_string(),
            })
            .collect();

        Self::with_categories(categories)
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            inner: RwLock::new(Tables {
                categories,
                ..Tables::default()
            }),
        }
    }

    fn filtered<F>(tables: &Tables, keep: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        tables.questions.values().filter(|q| keep(*q)).cloned().collect()
    }
}

fn required<T>(value: Option<T>, column: &str) -> StoreResult<T> {
    value.ok_or_else(|| {
        StoreError::Constraint(format!(
            "null value in column \"{}\" of relation \"questions\"",
            column
        ))
    })
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        let tables = self.inner.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Question>> {
        let tables = self.inner.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn insert(&self, new: NewQuestion) -> StoreResult<Question> {
        let question = required(new.question, "question")?;
        let answer = required(new.answer, "answer")?;
        let difficulty = required(new.difficulty, "difficulty")?;

        let mut tables = self.inner.write().await;
        tables.last_id += 1;

        let created = Question {
            id: tables.last_id,
            question,
            answer,
            category: new.category,
            difficulty,
        };
        tables.questions.insert(created.id, created.clone());

        Ok(created)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut tables = self.inner.write().await;
        tables
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn search_by_text(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.inner.read().await;
        Ok(Self::filtered(&tables, |q| {
            q.question.to_lowercase().contains(&needle)
        }))
    }

    async fn list_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        let tables = self.inner.read().await;
        Ok(Self::filtered(&tables, |q| q.category == Some(category_id)))
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.inner.read().await;
        let mut categories = tables.categories.clone();
        categories.sort_by(|a, b| a.kind.cmp(&b.kind));
        Ok(categories)
    }

    async fn quiz_candidates(
        &self,
        category_id: Option<i64>,
        exclude: &[i64],
    ) -> StoreResult<Vec<Question>> {
        let tables = self.inner.read().await;
        Ok(Self::filtered(&tables, |q| {
            category_id.is_none_or(|id| q.category == Some(id)) && !exclude.contains(&q.id)
        }))
    }
}
