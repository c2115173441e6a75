//! Axum route handlers for the Export API.

use anyhow::anyhow;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::{AppError, INVALID_REQUEST_BODY_MESSAGE};
use crate::export::text::export_plain_text;
use crate::export::writer::write_artifact;
use crate::export::{DocumentKind, ExportDocument};
use crate::generation::segmenter::SegmentedApplication;
use crate::state::AppState;

/// Request body for `POST /api/export/text`: the segmented application plus which half to export.
#[derive(Debug, Deserialize)]
pub struct TextExportRequest {
    pub kind: DocumentKind,
    #[serde(flatten)]
    pub application: SegmentedApplication,
}

/// POST /api/export/text
///
/// Returns the selected document as a UTF-8 attachment with an inferred `.txt` filename.
/// When `EXPORT_DIR` is configured the artifact is also written there; a failed write fails
/// the request and leaves no file behind.
pub async fn handle_export_text(
    State(state): State<AppState>,
    request: Result<Json<TextExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = request.map_err(|e| {
        warn!("Rejected export request body: {e}");
        AppError::Validation(INVALID_REQUEST_BODY_MESSAGE.to_string())
    })?;

    let document = ExportDocument::from_application(&request.application, request.kind);
    let artifact = export_plain_text(&document)?;

    if let Some(dir) = state.config.export_dir.clone() {
        let to_write = artifact.clone();
        let path = tokio::task::spawn_blocking(move || write_artifact(&dir, &to_write))
            .await
            .map_err(|e| AppError::Internal(anyhow!("spawn_blocking failed writing export: {e}")))??;
        info!(path = %path.display(), "Text export saved");
    }

    let headers = [
        (header::CONTENT_TYPE, artifact.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.filename()),
        ),
    ];
    Ok((headers, artifact.bytes().to_vec()).into_response())
}
