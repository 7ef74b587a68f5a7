// src/models/question.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The question text shown to the player.
    pub question: String,

    pub answer: String,

    /// Id of the owning category. Not checked against the categories table.
    pub category: Option<i64>,

    pub difficulty: i32,
}

/// DTO for creating a new question.
///
/// Every field may be absent; the store rejects the insert when a
/// non-nullable column is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i64>,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Raw `?page=` query value. Parsed leniently by `utils::pagination::page_number`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// Envelope for every endpoint that returns a list of questions.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,

    /// Omitted by the search and category-filter endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<i64, String>>,

    /// Id of the removed question, only set by the delete endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<i64>,
}

impl QuestionListResponse {
    pub fn new(questions: Vec<Question>, total_questions: usize) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            current_category: None,
            categories: None,
            deleted: None,
        }
    }

    pub fn with_categories(mut self, categories: BTreeMap<i64, String>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn in_category(mut self, category_id: i64) -> Self {
        self.current_category = Some(category_id);
        self
    }

    pub fn deleted(mut self, id: i64) -> Self {
        self.deleted = Some(id);
        self
    }
}
