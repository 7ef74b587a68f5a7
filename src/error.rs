// src/error.rs

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

use crate::store::StoreError;

/// Global Application Error Enum.
/// Every variant renders as one of the four fixed JSON error envelopes.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request (unparseable body)
    BadRequest(String),

    // 404 Not Found (unknown route, empty listing)
    NotFound(String),

    // 405 Method Not Allowed
    MethodNotAllowed,

    // 422 Unprocessable Entity (well-formed request the handler cannot act on)
    InvalidInput(String),

    // 422 Unprocessable Entity (the store raised a fault)
    StoreFailure(String),
}

/// Body shared by every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidInput(_) | AppError::StoreFailure(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let status = self.status();
        let message = match status {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::NOT_FOUND => "Resource Not Found",
            StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
            _ => "Unprocessable Entity",
        };

        ErrorEnvelope {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// The detail message is logged, never sent to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::StoreFailure(msg) => tracing::error!("Store failure: {}", msg),
            AppError::InvalidInput(msg) => tracing::warn!("Unprocessable request: {}", msg),
            AppError::BadRequest(msg) => tracing::debug!("Bad request: {}", msg),
            AppError::NotFound(msg) => tracing::debug!("Not found: {}", msg),
            AppError::MethodNotAllowed => {}
        }

        (self.status(), Json(self.envelope())).into_response()
    }
}

/// Converts `StoreError` into `AppError`.
/// Allows using `?` operator on store calls.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) | StoreError::Constraint(_) => {
                AppError::InvalidInput(err.to_string())
            }
            StoreError::Database(_) => AppError::StoreFailure(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::InvalidInput(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}
