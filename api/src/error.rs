use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use noteify_core::error::ApiError;

use crate::openai::CompletionError;

/// Response body for requests with empty or missing notes.
pub const MISSING_NOTES: &str = "Missing notes";

/// Response body for every completion-side failure. The cause goes to the
/// logs; clients always get the same message.
pub const GENERATION_FAILED: &str = "Failed to generate summary.";

/// Internal error type that converts to structured API responses
#[derive(Debug)]
pub enum AppError {
    /// Request carried no notes text (400)
    MissingNotes,
    /// Body was not valid JSON of the expected shape (400)
    InvalidBody { message: String },
    /// Completion backend failed (500)
    Completion(CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, api_error) = match self {
            AppError::MissingNotes => (StatusCode::BAD_REQUEST, ApiError::new(MISSING_NOTES)),
            AppError::InvalidBody { message } => (StatusCode::BAD_REQUEST, ApiError::new(message)),
            AppError::Completion(err) => {
                tracing::error!("Summary generation failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new(GENERATION_FAILED),
                )
            }
        };

        (status, Json(api_error)).into_response()
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        AppError::Completion(err)
    }
}
