//! Web and disk path resolution.
//!
//! Both paths start from the same routed path:
//!
//! 1. the item's `custom_path` attribute, when set (even if empty)
//! 2. otherwise the router's output for the representation kind
//!
//! The web path then has the first matching index filename stripped, while the
//! disk path keeps the filename and gets the output directory prepended:
//!
//! ```text
//! routed:  /blog/hello/index.html
//! web:     /blog/hello/
//! disk:    output/blog/hello/index.html
//! ```

use std::sync::Arc;

use crate::rep::{Rep, RepKind};
use crate::router::{RouteError, Router};
use crate::site::SiteConfig;

/// Computes web and disk paths for representations.
///
/// Cheap to clone; the router and site settings are shared.
#[derive(Clone)]
pub struct PathResolver {
    router: Arc<dyn Router>,
    site: Arc<SiteConfig>,
}

impl PathResolver {
    /// Create a resolver that routes through `router`.
    #[must_use]
    pub fn new(router: Arc<dyn Router>, site: Arc<SiteConfig>) -> Self {
        Self { router, site }
    }

    /// The router used for representations without a custom path.
    #[must_use]
    pub fn router(&self) -> &Arc<dyn Router> {
        &self.router
    }

    /// Site settings used for stripping and the output directory.
    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Custom path if set, otherwise the router's path for the representation.
    pub fn routed_path(&self, rep: &Rep) -> Result<String, RouteError> {
        if let Some(custom) = rep.custom_path() {
            tracing::trace!(item = rep.item.identifier(), rep = %rep.name, "Using custom path");
            return Ok(custom.to_owned());
        }

        match rep.kind {
            RepKind::Page => self.router.path_for_page_rep(rep),
            RepKind::Asset => self.router.path_for_asset_rep(rep),
        }
    }

    /// Web path: the routed path with the first matching index filename stripped.
    ///
    /// # Errors
    ///
    /// Returns the router's error when the representation has no custom path
    /// and the router cannot route it.
    pub fn path_for(&self, rep: &Rep) -> Result<String, RouteError> {
        let path = self.routed_path(rep)?;
        Ok(strip_index_filename(&path, &self.site.index_filenames).to_owned())
    }

    /// Disk path: the output directory followed by the unstripped routed path.
    ///
    /// # Errors
    ///
    /// Returns the router's error when the representation has no custom path
    /// and the router cannot route it.
    pub fn raw_path_for(&self, rep: &Rep) -> Result<String, RouteError> {
        let path = self.routed_path(rep)?;
        Ok(format!("{}{path}", self.site.output_dir))
    }
}

impl std::fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathResolver")
            .field("site", &self.site)
            .finish_non_exhaustive()
    }
}

/// Strip the first index filename in `index_filenames` that ends `path`.
///
/// Entries are compared as literal suffixes in order, and scanning stops at
/// the first match even if a later entry would also match. Empty entries
/// never match.
///
/// ```
/// use quill_router::strip_index_filename;
///
/// let filenames = ["index.htm".to_owned(), "index.html".to_owned()];
/// assert_eq!(strip_index_filename("/a/index.html", &filenames), "/a/");
/// assert_eq!(strip_index_filename("/a/style.css", &filenames), "/a/style.css");
/// ```
#[must_use]
pub fn strip_index_filename<'a>(path: &'a str, index_filenames: &[String]) -> &'a str {
    index_filenames
        .iter()
        .filter(|filename| !filename.is_empty())
        .find_map(|filename| path.strip_suffix(filename.as_str()))
        .unwrap_or(path)
}
