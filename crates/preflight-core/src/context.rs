//! Context types for check execution.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Contents of a project file, or why they are not available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileText {
    /// The file was read in full.
    Present(String),
    /// No file exists at the path.
    Missing,
    /// The file exists but could not be read as UTF-8 text.
    Unreadable(String),
}

impl FileText {
    /// Returns the text if the file was read.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Present(text) => Some(text),
            Self::Missing | Self::Unreadable(_) => None,
        }
    }
}

/// Context provided to checks.
///
/// All file access goes through this type so that a missing file is a value
/// the check can report, never an error that aborts the run.
#[derive(Debug, Clone)]
pub struct ProjectContext<'a> {
    /// Project root directory.
    pub root: &'a Path,
}

impl<'a> ProjectContext<'a> {
    /// Creates a new project context.
    #[must_use]
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Resolves a project-relative path.
    #[must_use]
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Returns true if a file or directory exists at the project-relative path.
    #[must_use]
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.path(relative).exists()
    }

    /// Reads a project-relative file in full.
    #[must_use]
    pub fn read_text(&self, relative: impl AsRef<Path>) -> FileText {
        let path = self.path(relative);
        match std::fs::read_to_string(&path) {
            Ok(text) => FileText::Present(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Not found: {}", path.display());
                FileText::Missing
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                FileText::Unreadable(e.to_string())
            }
        }
    }
}
