//! PDF-to-text extraction for uploaded resumes.

use thiserror::Error;
use tracing::debug;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("only PDF uploads are accepted")]
    NotPdf,

    #[error("failed to parse PDF: {0}")]
    Parse(String),
}

/// Extracts the text layer of an uploaded PDF.
///
/// Anything not declared as `application/pdf` is rejected with `NotPdf`. A declared PDF whose
/// bytes lack the `%PDF-` header, or that `pdf-extract` cannot read, fails with `Parse`.
/// CPU-bound: call from `tokio::task::spawn_blocking`.
pub fn extract_text(bytes: &[u8], content_type: Option<&str>) -> Result<String, ExtractError> {
    if !is_pdf_content_type(content_type) {
        return Err(ExtractError::NotPdf);
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ExtractError::Parse("missing %PDF- header".to_string()));
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;
    debug!(bytes = bytes.len(), chars = text.len(), "Extracted PDF text");
    Ok(text)
}

/// Compares the media type only, ignoring parameters such as `; charset=binary`.
fn is_pdf_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
}
