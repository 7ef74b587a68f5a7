// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{categories, fallback, questions, quiz},
    state::AppState,
};

pub const ALLOWED_HEADERS: &str = "Content-Type,Authorization,true";
pub const ALLOWED_METHODS: &str = "GET,POST,PATCH,DELETE,OPTIONS";

/// Assembles the main application router.
///
/// * Registers the category, question and quiz routes.
/// * Unknown paths and unsupported methods answer with the JSON error envelope.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (the store).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // CorsLayer only advertises these on preflight; the client expects them everywhere.
    let cors_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ));

    let category_routes = Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::list_category_questions),
        );

    let question_routes = Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/{id}", delete(questions::delete_question));

    let quiz_routes = Router::new().route("/quizzes", post(quiz::next_question));

    Router::new()
        .merge(category_routes)
        .merge(question_routes)
        .merge(quiz_routes)
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(cors_headers)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
