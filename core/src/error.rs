use serde::Serialize;
use utoipa::ToSchema;

/// Wire-level error body returned by the API.
///
/// The contract is deliberately a single message string — the underlying
/// cause of a failure stays in the server logs, never in the response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    /// What went wrong, e.g. "Missing notes"
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
