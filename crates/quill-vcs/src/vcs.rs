//! Version control adapter contract.

use std::path::Path;

use quill_plugin::{Capability, ContractError};

use crate::error::VcsError;

/// Minimal view of a version control system: add, remove and move files.
///
/// Every operation has a default body that fails with
/// [`VcsError::NotImplemented`] naming the adapter and the operation. A
/// partial adapter (e.g. read-only integration) therefore loads without
/// complaint and only fails when an unsupported operation is called.
///
/// Errors from the backend are returned unchanged; callers decide whether to
/// abort the build.
pub trait VersionControl: Send + Sync {
    /// Add `filename` to the working copy.
    fn add(&self, _filename: &Path) -> Result<(), VcsError> {
        Err(not_implemented::<Self>("add"))
    }

    /// Remove `filename` from the working copy.
    ///
    /// Afterwards the file must no longer be present on disk.
    fn remove(&self, _filename: &Path) -> Result<(), VcsError> {
        Err(not_implemented::<Self>("remove"))
    }

    /// Move `source` to `destination` within the working copy.
    ///
    /// Afterwards the file must exist only at `destination`.
    fn move_file(&self, _source: &Path, _destination: &Path) -> Result<(), VcsError> {
        Err(not_implemented::<Self>("move_file"))
    }
}

impl Capability for dyn VersionControl {
    const KIND: &'static str = "vcs";
    type Context = ();
}

fn not_implemented<T: ?Sized>(operation: &'static str) -> VcsError {
    VcsError::NotImplemented(ContractError::new::<T>(
        <dyn VersionControl as Capability>::KIND,
        operation,
    ))
}

/// Adapter that overrides nothing; every operation fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseVcs;

impl VersionControl for BaseVcs {}
