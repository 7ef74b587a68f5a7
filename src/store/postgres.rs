// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreError, StoreResult, TriviaStore};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn insert(&self, new: NewQuestion) -> StoreResult<Question> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // 23502: not_null_violation
            sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23502") => {
                StoreError::Constraint(db.message().to_string())
            }
            other => StoreError::Database(other),
        })
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    async fn search_by_text(&self, term: &str) -> StoreResult<Vec<Question>> {
        // strpos instead of ILIKE so '%' and '_' in the term match literally.
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE strpos(lower(question), lower($1)) > 0
            ORDER BY id
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn list_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY type
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn quiz_candidates(
        &self,
        category_id: Option<i64>,
        exclude: &[i64],
    ) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::BIGINT IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .bind(exclude.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }
}
