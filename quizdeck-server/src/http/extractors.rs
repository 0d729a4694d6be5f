//! Custom Axum extractors
//!
//! Rejections from axum's own extractors are plain-text; these wrap them so
//! every malformed request gets the same JSON 400 body as a validation error.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a numeric id from path
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    message: rejection.body_text(),
                })
            })?;

        let id = id.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::Malformed {
                message: format!("id must be an integer, got '{}'", id),
            })
        })?;

        Ok(Self(id))
    }
}

/// JSON body whose decoding errors become `ApiError::Validation`
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::Malformed {
                message: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}

/// Query string whose decoding errors become `ApiError::Validation`
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    message: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}
