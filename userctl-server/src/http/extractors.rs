//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::UserId;

/// Extract the `{id}` path segment as an integer user id.
///
/// Anything that does not parse (letters, empty, out of `i32` range) is
/// rejected with [`ApiError::InvalidId`] before any store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidUserId(pub UserId);

impl<S> FromRequestParts<S> for ValidUserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;

        let id = raw.parse::<UserId>().map_err(|_| ApiError::InvalidId)?;
        Ok(Self(id))
    }
}

/// JSON body whose every rejection becomes [`ApiError::InvalidData`].
///
/// Covers syntax errors, type mismatches, missing fields and a missing
/// `Content-Type: application/json`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            ApiError::InvalidData
        })?;

        Ok(Self(value))
    }
}
