// Document export: plain text, paginated PDF, and content-derived filenames.
// Rasterization and PDF page assembly are injected capabilities (see pdf.rs).

pub mod filename;
pub mod handlers;
pub mod page;
pub mod pdf;
pub mod text;
pub mod trigger;
pub mod writer;

use std::path::PathBuf;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::export::filename::infer_file_name;
use crate::export::page::PagePlacement;
use crate::generation::segmenter::SegmentedApplication;

/// Which of the two generated documents is being exported. Only affects the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    CoverLetter,
    Resume,
}

impl DocumentKind {
    /// Filename token for this kind.
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::CoverLetter => "cover_letter",
            DocumentKind::Resume => "resume",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Document is empty")]
    EmptyDocument,

    #[error("An export of this document is already in progress")]
    AlreadyInProgress,

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Rendered image has zero width")]
    EmptyRender,

    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("PDF assembly failed: {0}")]
    Assemble(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A finished, downloadable export. Built in full or not at all.
#[derive(Debug, Clone)]
pub enum ExportArtifact {
    Text {
        filename: String,
        contents: String,
    },
    Pdf {
        filename: String,
        pages: Vec<PagePlacement>,
        bytes: Bytes,
    },
}

impl ExportArtifact {
    pub fn filename(&self) -> &str {
        match self {
            ExportArtifact::Text { filename, .. } | ExportArtifact::Pdf { filename, .. } => {
                filename
            }
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            ExportArtifact::Text { contents, .. } => contents.as_bytes(),
            ExportArtifact::Pdf { bytes, .. } => bytes,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportArtifact::Text { .. } => "text/plain; charset=utf-8",
            ExportArtifact::Pdf { .. } => "application/pdf",
        }
    }
}

/// One document to export, plus the texts its filename is inferred from.
///
/// `name_source` is scanned for the person's name (usually the resume); `context` is the
/// fallback name source and the text the job title is read from (usually the cover letter).
#[derive(Debug, Clone, Copy)]
pub struct ExportDocument<'a> {
    pub kind: DocumentKind,
    pub text: &'a str,
    pub name_source: &'a str,
    pub context: &'a str,
}

impl<'a> ExportDocument<'a> {
    /// Picks the document for `kind` out of a segmented application.
    pub fn from_application(application: &'a SegmentedApplication, kind: DocumentKind) -> Self {
        let text = match kind {
            DocumentKind::CoverLetter => application.cover_letter.as_str(),
            DocumentKind::Resume => application.resume_snippet.as_str(),
        };
        Self {
            kind,
            text,
            name_source: &application.resume_snippet,
            context: &application.cover_letter,
        }
    }

    /// Infers a fresh filename (new date stamp and suffix on every call).
    pub fn file_name(&self, extension: &str) -> String {
        let stem = infer_file_name(self.name_source, self.context, self.kind);
        format!("{stem}.{extension}")
    }
}
