//! Single-file upload acquisition.
//!
//! Two input sources — an explicit `--file` selection and positional
//! candidates — unify into one slot. A slot holds at most one file;
//! replacing it discards the previous reference without side effects.
//! Extension validation is advisory (no content sniffing): the server is the
//! authority on actual content validity.

use std::path::{Path, PathBuf};

use cax_core::CoreError;

/// The single-file holding state of one upload zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSlot {
    path: PathBuf,
    filename: String,
}

impl UploadSlot {
    /// Accept the first candidate file; additional candidates are silently
    /// ignored per the single-slot model.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if no candidate is given or the first
    /// candidate is not a `.pdf` file (case-insensitive). On rejection the
    /// slot is never created.
    pub fn accept(candidates: &[PathBuf]) -> Result<Self, CoreError> {
        let path = candidates
            .first()
            .ok_or_else(|| CoreError::Validation("no file selected".into()))?;
        Self::from_path(path)
    }

    /// Unify the two acquisition sources: an explicit selection takes
    /// precedence over positional candidates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if neither source yields a file or the
    /// chosen file is not a `.pdf`.
    pub fn acquire(picked: Option<&Path>, candidates: &[PathBuf]) -> Result<Self, CoreError> {
        match picked {
            Some(path) => Self::from_path(path),
            None => Self::accept(candidates),
        }
    }

    fn from_path(path: &Path) -> Result<Self, CoreError> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| {
                CoreError::Validation(format!("not a file path: {}", path.display()))
            })?;

        if !is_pdf_filename(&filename) {
            return Err(CoreError::Validation(format!(
                "only .pdf files are supported: {filename}"
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
            filename,
        })
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Read the file contents for upload.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the file cannot be read; this is a
    /// pre-flight failure, surfaced before any request is made.
    pub fn read_bytes(&self) -> Result<Vec<u8>, CoreError> {
        std::fs::read(&self.path).map_err(|e| {
            CoreError::Validation(format!("cannot read {}: {e}", self.path.display()))
        })
    }
}

fn is_pdf_filename(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}
