//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a todo id from path
///
/// Ids are positive integers; anything else is a validation error rather
/// than axum's default plain-text rejection.
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::NotPositive { field: "id" }))?;

        if id < 1 {
            return Err(ApiError::Validation(ValidationError::NotPositive {
                field: "id",
            }));
        }

        Ok(Self(id))
    }
}

/// JSON body extractor whose rejection is a validation error
///
/// Malformed or incomplete bodies surface as 422 with detail instead of
/// axum's default 400.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::MalformedBody {
                detail: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}
