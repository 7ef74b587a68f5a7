// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use rand::{Rng, seq::SliceRandom};

use crate::{
    error::AppError,
    models::{
        question::Question,
        quiz::{QuizRequest, QuizResponse},
    },
    store::SharedStore,
    utils::extract::Payload,
};

/// Picks one candidate uniformly at random, or `None` when nothing is left.
pub fn choose_question<R>(candidates: &[Question], rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng).cloned()
}

/// Serves the next quiz question.
///
/// * `quiz_category.id == 0` plays across every category.
/// * Ids in `previous_questions` are never served again.
/// * Returns `question: null` once the pool is exhausted.
///
/// Every failure, including an unreadable body, is a 422.
pub async fn next_question(
    State(store): State<SharedStore>,
    payload: Result<Payload<QuizRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let Payload(req) = payload.map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let previous = req
        .previous_questions
        .ok_or_else(|| AppError::InvalidInput("previous_questions is required".to_string()))?;
    let category = req
        .quiz_category
        .ok_or_else(|| AppError::InvalidInput("quiz_category is required".to_string()))?;

    let candidates = store
        .quiz_candidates(category.filter(), &previous)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch quiz candidates: {:?}", e);
            AppError::from(e)
        })?;

    let question = choose_question(&candidates, &mut rand::thread_rng());
    tracing::debug!(
        "Quiz turn: category {}, {} seen, {} candidates",
        category.id,
        previous.len(),
        candidates.len()
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
