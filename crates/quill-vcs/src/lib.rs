//! Version control adapters for Quill.
//!
//! Data sources that keep content as flat files use a [`VersionControl`]
//! adapter to keep a working copy in sync when files are created, deleted or
//! renamed. Adapters only stage changes; they never commit.
//!
//! - [`VersionControl`] trait with `add()`, `remove()` and `move_file()`
//! - [`BaseVcs`] implements the trait without overriding anything
//! - [`RecordingVcs`] for testing (behind `mock` feature flag)

mod error;
#[cfg(feature = "mock")]
mod mock;
mod vcs;

pub use error::VcsError;
#[cfg(feature = "mock")]
pub use mock::{RecordingVcs, VcsOperation};
pub use vcs::{BaseVcs, VersionControl};
