//! Site driver error type.

use quill_config::ConfigError;
use quill_filter::FilterError;
use quill_plugin::PluginError;
use quill_router::RouteError;
use quill_vcs::VcsError;

/// Error raised while driving a site build.
///
/// Wraps the error of whichever layer failed without translating it.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Configuration could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A component identifier is not registered.
    #[error("{0}")]
    Plugin(#[from] PluginError),

    /// A representation could not be routed.
    #[error("{0}")]
    Route(#[from] RouteError),

    /// The VCS adapter failed.
    #[error("{0}")]
    Vcs(#[from] VcsError),

    /// A filter failed.
    #[error("{0}")]
    Filter(#[from] FilterError),
}
