//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::warn;

use crate::errors::{AppError, INVALID_REQUEST_BODY_MESSAGE};
use crate::generation::generator::{generate_application, GenerateRequest};
use crate::generation::segmenter::SegmentedApplication;
use crate::state::AppState;

/// POST /api/generate
///
/// Generates a cover letter and tailored resume from `{jobDescription, userResume}` and
/// returns `{coverLetter, resumeSnippet}`. Both fields are always present.
pub async fn handle_generate(
    State(state): State<AppState>,
    request: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<SegmentedApplication>, AppError> {
    let Json(request) = request.map_err(|e| {
        warn!("Rejected generate request body: {e}");
        AppError::Validation(INVALID_REQUEST_BODY_MESSAGE.to_string())
    })?;

    let application = generate_application(state.writer.as_ref(), &request).await?;
    Ok(Json(application))
}
