//! Plain-text export.

use tracing::info;

use crate::export::{ExportArtifact, ExportDocument, ExportError};

/// Strips trailing whitespace from every line, collapses blank-line runs to one `\n\n`
/// paragraph break, and trims outer whitespace.
///
/// `\r\n` becomes `\n`. A line holding only spaces counts as blank.
pub fn normalize_paragraphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0usize;

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push_str(if blank_run > 0 { "\n\n" } else { "\n" });
        }
        blank_run = 0;
        out.push_str(line);
    }

    out.trim().to_string()
}

/// Builds a UTF-8 `.txt` artifact for the document.
pub fn export_plain_text(document: &ExportDocument<'_>) -> Result<ExportArtifact, ExportError> {
    let contents = normalize_paragraphs(document.text);
    if contents.is_empty() {
        return Err(ExportError::EmptyDocument);
    }

    let filename = document.file_name("txt");
    info!(
        kind = document.kind.label(),
        bytes = contents.len(),
        "Exported {filename}"
    );

    Ok(ExportArtifact::Text { filename, contents })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::DocumentKind;

    fn document(text: &str) -> ExportDocument<'_> {
        ExportDocument {
            kind: DocumentKind::Resume,
            text,
            name_source: text,
            context: "",
        }
    }

    #[test]
    fn test_normalize_collapses_blank_runs() {
        assert_eq!(
            normalize_paragraphs("One\n\n\n\nTwo\n \n\t\nThree"),
            "One\n\nTwo\n\nThree"
        );
    }

    #[test]
    fn test_normalize_keeps_single_newlines_and_trims() {
        assert_eq!(
            normalize_paragraphs("\n\n  Line one  \nLine two\n\n"),
            "Line one\nLine two"
        );
    }

    #[test]
    fn test_normalize_strips_trailing_whitespace_but_keeps_indent() {
        assert_eq!(
            normalize_paragraphs("SKILLS \t\n  - Rust   \n  - Go"),
            "SKILLS\n  - Rust\n  - Go"
        );
    }

    #[test]
    fn test_normalize_handles_crlf() {
        assert_eq!(normalize_paragraphs("A\r\n\r\nB\r\n"), "A\n\nB");
    }

    #[test]
    fn test_export_plain_text_builds_txt_artifact() {
        let artifact = export_plain_text(&document("Jane Doe\n\n\nSKILLS\nRust")).unwrap();
        match artifact {
            ExportArtifact::Text { filename, contents } => {
                assert!(filename.starts_with("jane_doe_professional_resume_"));
                assert!(filename.ends_with(".txt"));
                assert_eq!(contents, "Jane Doe\n\nSKILLS\nRust");
            }
            other => panic!("expected text artifact, got {other:?}"),
        }
    }

    #[test]
    fn test_export_plain_text_rejects_blank_document() {
        assert!(matches!(
            export_plain_text(&document(" \n\n ")),
            Err(ExportError::EmptyDocument)
        ));
    }
}
