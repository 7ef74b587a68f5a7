// src/handlers/fallback.rs

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Router fallback for paths that match no route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::debug!("{} not allowed on {}", method, uri.path());
    AppError::MethodNotAllowed
}
