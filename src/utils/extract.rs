// src/utils/extract.rs

//! Extractors whose rejections render as the API's JSON error envelope
//! instead of axum's plain-text defaults.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::{error::AppError, models::question::PageParams, utils::pagination::page_number};

/// JSON request body. Malformed JSON is a 400, well-formed JSON of the wrong
/// shape is a 422.
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Payload(value))
    }
}

/// Single integer path segment such as `/questions/{id}`.
///
/// A segment that is not an integer means the route does not exist, so the
/// rejection is a 404.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(rejection.body_text()))?;
        Ok(PathId(id))
    }
}

/// 1-based page number from `?page=`. Never rejects: anything unusable is page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PageParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();
        Ok(Page(page_number(params.page.as_deref())))
    }
}
