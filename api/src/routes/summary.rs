use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use noteify_core::error::ApiError;
use noteify_core::prompt::{SYSTEM_PROMPT, build_summary_prompt};
use noteify_core::summary::{SummaryRequest, SummaryResult, normalize_completion};

use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// Completion budget for one summary: a 3-6 sentence email plus tags and
/// a next step.
const MAX_SUMMARY_TOKENS: u32 = 350;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/summary", post(generate_summary))
}

/// Turn free-text customer notes into a summary email, tags, and a next step
#[utoipa::path(
    post,
    path = "/api/summary",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Generated summary", body = SummaryResult),
        (status = 400, description = "Missing notes", body = ApiError),
        (status = 500, description = "Summary generation failed", body = ApiError)
    ),
    tag = "summary"
)]
pub async fn generate_summary(
    State(state): State<AppState>,
    AppJson(request): AppJson<SummaryRequest>,
) -> Result<Json<SummaryResult>, AppError> {
    // Whitespace-only notes are the caller's business; only truly empty
    // notes are rejected.
    if request.notes.is_empty() {
        return Err(AppError::MissingNotes);
    }

    let prompt = build_summary_prompt(
        &request.notes,
        request.name.as_deref(),
        request.email.as_deref(),
    );

    let content = state
        .openai
        .chat_completion(SYSTEM_PROMPT, &prompt, MAX_SUMMARY_TOKENS)
        .await?;

    Ok(Json(normalize_completion(&content)))
}
