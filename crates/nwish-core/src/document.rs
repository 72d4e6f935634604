//! The read-only document shown by the screen

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};

/// Immutable text loaded once at startup.
///
/// Cloning is cheap: the text is shared behind an `Arc` and never mutated.
#[derive(Debug, Clone)]
pub struct Document {
    path: Option<PathBuf>,
    text: Arc<str>,
}

impl Document {
    /// Read a document from disk.
    ///
    /// A missing file maps to [`Error::DocumentNotFound`]; any other read or
    /// decoding failure maps to [`Error::DocumentRead`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::document_not_found(path),
            _ => Error::document_read(path, e.to_string()),
        })?;

        tracing::debug!("Loaded document {:?} ({} bytes)", path, text.len());

        Ok(Self {
            path: Some(path.to_path_buf()),
            text: text.into(),
        })
    }

    /// Wrap in-memory text (no backing file)
    pub fn from_text(text: impl Into<Arc<str>>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}
