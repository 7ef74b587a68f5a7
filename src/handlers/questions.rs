// src/handlers/questions.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    handlers::categories::fetch_category_map,
    models::question::{NewQuestion, QuestionListResponse, SearchRequest},
    store::{SharedStore, TriviaStore},
    utils::{
        extract::{Page, PathId, Payload},
        pagination::paginate,
    },
};

/// Re-reads all questions and returns the requested page with the total
/// count and the category mapping.
async fn question_page(
    store: &dyn TriviaStore,
    page: i64,
) -> Result<QuestionListResponse, AppError> {
    let questions = store.list_questions().await.map_err(|e| {
        tracing::error!("Failed to list questions: {:?}", e);
        AppError::from(e)
    })?;
    let categories = fetch_category_map(store).await?;

    Ok(
        QuestionListResponse::new(paginate(page, &questions).to_vec(), questions.len())
            .with_categories(categories),
    )
}

/// Lists questions ten per page, ordered by id.
///
/// A page past the end (or below 1) is a 404.
pub async fn list_questions(
    State(store): State<SharedStore>,
    Page(page): Page,
) -> Result<impl IntoResponse, AppError> {
    let listing = question_page(store.as_ref(), page).await?;

    if listing.questions.is_empty() {
        return Err(AppError::NotFound(format!("Page {} is empty", page)));
    }

    Ok(Json(listing))
}

/// Creates a question and returns the refreshed listing at `?page` (default 1).
///
/// No field is required at this layer; an incomplete question is rejected by
/// the store and surfaces as a 422.
pub async fn create_question(
    State(store): State<SharedStore>,
    Page(page): Page,
    Payload(payload): Payload<NewQuestion>,
) -> Result<impl IntoResponse, AppError> {
    let created = store.insert(payload).await.map_err(|e| {
        tracing::warn!("Failed to create question: {:?}", e);
        AppError::from(e)
    })?;
    tracing::info!("Created question {}", created.id);

    let listing = question_page(store.as_ref(), page).await?;
    Ok(Json(listing))
}

/// Deletes a question by id and returns the refreshed listing at `?page`.
///
/// Deleting an id that does not exist is a 422, same as any other failure.
pub async fn delete_question(
    State(store): State<SharedStore>,
    PathId(id): PathId,
    Page(page): Page,
) -> Result<impl IntoResponse, AppError> {
    let question = store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::InvalidInput(format!("Question {} does not exist", id)))?;

    store.delete(question.id).await.map_err(|e| {
        tracing::warn!("Failed to delete question {}: {:?}", id, e);
        AppError::from(e)
    })?;
    tracing::info!("Deleted question {}", id);

    let listing = question_page(store.as_ref(), page).await?;
    Ok(Json(listing.deleted(id)))
}

/// Case-insensitive substring search over question text.
///
/// No match is still a success, with an empty list and a total of 0.
pub async fn search_questions(
    State(store): State<SharedStore>,
    Page(page): Page,
    Payload(payload): Payload<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let term = payload
        .search_term
        .ok_or_else(|| AppError::InvalidInput("searchTerm is required".to_string()))?;

    let matches = store.search_by_text(&term).await.map_err(|e| {
        tracing::error!("Failed to search questions for {:?}: {:?}", term, e);
        AppError::from(e)
    })?;
    tracing::debug!("Search {:?} matched {} questions", term, matches.len());

    Ok(Json(QuestionListResponse::new(
        paginate(page, &matches).to_vec(),
        matches.len(),
    )))
}
