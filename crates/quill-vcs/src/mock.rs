//! Recording adapter for testing.
//!
//! Provides [`RecordingVcs`] for checking which working copy changes a data
//! source asked for, without touching a real repository.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockWriteGuard};

use crate::error::VcsError;
use crate::vcs::VersionControl;

/// A working copy change requested through [`VersionControl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsOperation {
    Add(PathBuf),
    Remove(PathBuf),
    Move { from: PathBuf, to: PathBuf },
}

/// In-memory version control adapter.
///
/// Keeps a set of tracked paths and the log of operations applied to it.
/// Removing an untracked file is a no-op; moving an untracked file fails with
/// [`VcsError::Io`] (`NotFound`), like a real backend would.
#[derive(Debug, Default)]
pub struct RecordingVcs {
    tracked: RwLock<BTreeSet<PathBuf>>,
    operations: RwLock<Vec<VcsOperation>>,
}

impl RecordingVcs {
    /// Create an adapter with an empty working copy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `path` already tracked.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.tracked.write().unwrap().insert(path.into());
        self
    }

    /// Whether `path` is tracked.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.tracked.read().unwrap().contains(path.as_ref())
    }

    /// Tracked paths, sorted.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn files(&self) -> Vec<PathBuf> {
        self.tracked.read().unwrap().iter().cloned().collect()
    }

    /// Operations applied so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn operations(&self) -> Vec<VcsOperation> {
        self.operations.read().unwrap().clone()
    }

    /// Append to the operation log.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    fn record(&self, operation: VcsOperation) {
        self.operations.write().unwrap().push(operation);
    }

    /// Write access to the tracked set.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    fn tracked_mut(&self) -> RwLockWriteGuard<'_, BTreeSet<PathBuf>> {
        self.tracked.write().unwrap()
    }
}

/// # Panics
///
/// Every operation panics if an internal lock is poisoned.
impl VersionControl for RecordingVcs {
    fn add(&self, filename: &Path) -> Result<(), VcsError> {
        self.tracked_mut().insert(filename.to_path_buf());
        self.record(VcsOperation::Add(filename.to_path_buf()));
        Ok(())
    }

    fn remove(&self, filename: &Path) -> Result<(), VcsError> {
        self.tracked_mut().remove(filename);
        self.record(VcsOperation::Remove(filename.to_path_buf()));
        Ok(())
    }

    fn move_file(&self, source: &Path, destination: &Path) -> Result<(), VcsError> {
        {
            let mut tracked = self.tracked_mut();
            if !tracked.remove(source) {
                return Err(VcsError::io(
                    source,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file is not tracked"),
                ));
            }
            tracked.insert(destination.to_path_buf());
        }
        self.record(VcsOperation::Move {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
        });
        Ok(())
    }
}
