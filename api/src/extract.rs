//! Custom extractors that convert axum rejections to structured AppError responses.
//!
//! Use `AppJson<T>` as a drop-in replacement for `axum::Json<T>` in handler signatures.
//! Unlike the standard extractor, deserialization failures produce a JSON `AppError`
//! instead of axum's default plain-text 422 response.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::AppError;

/// JSON extractor that converts deserialization errors to structured `AppError` responses.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::InvalidBody {
                message: format!("Invalid request body: {}", rejection.body_text()),
            }),
        }
    }
}
