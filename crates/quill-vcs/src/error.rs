//! Version control error type.

use std::path::PathBuf;

use quill_plugin::ContractError;

/// Version control error.
///
/// Backend failures are carried as-is in [`VcsError::Io`] or
/// [`VcsError::Backend`] so callers can inspect the original error.
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    /// The adapter does not implement the requested operation.
    #[error(transparent)]
    NotImplemented(#[from] ContractError),
    /// Filesystem error on a working copy path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Error reported by the version control backend.
    #[error("[{backend}] {source}")]
    Backend {
        /// Backend identifier (e.g. "git").
        backend: &'static str,
        /// Underlying error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl VcsError {
    /// Create an I/O error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a backend-specific error.
    #[must_use]
    pub fn backend(
        backend: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Backend {
            backend,
            source: Box::new(source),
        }
    }
}
