use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;
use crate::upload::extract::ExtractError;

/// User-facing message for any failure of the model call.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate application";
/// User-facing message for a JSON body that does not deserialize.
pub const INVALID_REQUEST_BODY_MESSAGE: &str = "Invalid request body";
/// User-facing message for a multipart body that cannot be read.
pub const FILE_PROCESSING_FAILED_MESSAGE: &str = "Failed to process file";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload error: {0}")]
    Upload(#[from] ExtractError),

    #[error("Unreadable upload: {0}")]
    UploadProcessing(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Upload(e) => {
                tracing::warn!("Upload rejected: {e}");
                let message = match e {
                    ExtractError::NotPdf => "Only PDF resumes are accepted",
                    ExtractError::Parse(_) => "Failed to parse PDF",
                };
                (StatusCode::BAD_REQUEST, "UPLOAD_ERROR", message.to_string())
            }
            AppError::UploadProcessing(detail) => {
                tracing::error!("Upload processing failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPLOAD_ERROR",
                    FILE_PROCESSING_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Export(ExportError::EmptyDocument) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Nothing to export: the document is empty".to_string(),
            ),
            AppError::Export(ExportError::AlreadyInProgress) => (
                StatusCode::CONFLICT,
                "EXPORT_IN_PROGRESS",
                "An export of this document is already in progress".to_string(),
            ),
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "Error generating the document. Please try again.".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    GENERATION_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
