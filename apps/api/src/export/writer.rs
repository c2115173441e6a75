//! Writes finished artifacts to disk. A write either lands the complete file or nothing.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::export::{ExportArtifact, ExportError};

/// Writes `artifact` into `dir` under its inferred filename.
///
/// Bytes go to a temp file in the same directory, which is then renamed into place.
/// Any failure (missing directory, permission denied, full disk) leaves no target file.
pub fn write_artifact(dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf, ExportError> {
    let target = dir.join(artifact.filename());
    let write_error = |source: std::io::Error| ExportError::Write {
        path: target.clone(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(artifact.bytes()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;
    tmp.persist(&target).map_err(|e| write_error(e.error))?;

    info!(path = %target.display(), bytes = artifact.bytes().len(), "Wrote export artifact");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ExportArtifact {
        ExportArtifact::Text {
            filename: "jane_doe_developer_resume_2024-05-01_a1b2.txt".to_string(),
            contents: "Jane Doe\n\nSKILLS".to_string(),
        }
    }

    #[test]
    fn test_write_artifact_creates_complete_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(dir.path(), &artifact()).unwrap();
        assert_eq!(path, dir.path().join(artifact().filename()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Jane Doe\n\nSKILLS");
        // Only the artifact remains; the temp file was renamed, not copied.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_artifact_missing_dir_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_artifact(&missing, &artifact()).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
        assert!(!missing.exists());
    }
}
