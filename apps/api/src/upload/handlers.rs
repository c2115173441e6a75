use anyhow::anyhow;
use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::upload::extract::{extract_text, ExtractError};

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
}

/// POST /api/upload
///
/// Accepts a multipart form with a PDF in the `resume` field and returns its text.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UploadProcessing(e.to_string()))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::UploadProcessing(e.to_string()))?;

        // pdf-extract is CPU-bound and may panic on hostile input; a panic becomes a parse error.
        let text = tokio::task::spawn_blocking(move || extract_text(&bytes, content_type.as_deref()))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    AppError::Upload(ExtractError::Parse("PDF parser panicked".to_string()))
                } else {
                    AppError::Internal(anyhow!("spawn_blocking failed in PDF extraction: {e}"))
                }
            })??;

        info!(chars = text.len(), "Resume upload parsed");
        return Ok(Json(UploadResponse { text }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
