use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures surfaced by handle operations.
#[derive(Debug, Error)]
pub enum FileError {
    /// The location does not exist on the filesystem.
    #[error("cannot read '{}': no such file", .path.display())]
    NotFound {
        /// Path that failed the existence check.
        path: PathBuf,
    },

    /// An operation against the location failed.
    #[error("cannot {} '{}': {}", .action, .path.display(), .source)]
    Io {
        /// Operation being performed.
        action: &'static str,
        /// Path involved in the failing operation.
        path: PathBuf,
        /// Underlying error reported by the operating system.
        source: io::Error,
    },
}

impl FileError {
    pub(crate) const fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    pub(crate) const fn io(action: &'static str, path: PathBuf, source: io::Error) -> Self {
        Self::Io {
            action,
            path,
            source,
        }
    }

    /// Returns the path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
        }
    }
}
