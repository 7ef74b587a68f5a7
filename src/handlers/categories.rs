// src/handlers/categories.rs

use std::collections::BTreeMap;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::{
        category::{CategoriesResponse, category_map},
        question::QuestionListResponse,
    },
    store::{SharedStore, TriviaStore},
    utils::extract::PathId,
};

/// Fetches the `{id: type}` mapping embedded in question listings.
pub(crate) async fn fetch_category_map(
    store: &dyn TriviaStore,
) -> Result<BTreeMap<i64, String>, AppError> {
    let categories = store.list_categories().await.map_err(|e| {
        tracing::error!("Failed to fetch categories: {:?}", e);
        AppError::from(e)
    })?;

    Ok(category_map(categories))
}

/// Lists every category as an `{id: type}` mapping, ordered by label.
pub async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let categories = fetch_category_map(store.as_ref()).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// Lists all questions of one category, unpaginated.
///
/// The id is not checked against the categories table; a category with no
/// questions, and any store fault, is a 404.
pub async fn list_category_questions(
    State(store): State<SharedStore>,
    PathId(category_id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let questions = store.list_by_category(category_id).await.map_err(|e| {
        tracing::error!("Failed to fetch questions for category {}: {:?}", category_id, e);
        AppError::NotFound(e.to_string())
    })?;

    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions in category {}",
            category_id
        )));
    }

    let total = questions.len();
    Ok(Json(
        QuestionListResponse::new(questions, total).in_category(category_id),
    ))
}
