//! Mock router implementation for testing.
//!
//! Provides [`MockRouter`] for exercising path resolution without a real
//! routing strategy.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::rep::{Rep, RepKind};
use crate::router::{RouteError, Router};

/// Mock router for testing.
///
/// Returns preconfigured paths keyed by item identifier and records every
/// call. Items without a configured path fail with [`RouteError::Unroutable`].
///
/// # Example
///
/// ```ignore
/// use quill_router::{MockRouter, RepKind};
///
/// let router = MockRouter::new()
///     .with_page("/about/", "/about/index.html")
///     .with_asset("/logo/", "/logo.png");
///
/// // ... resolve paths ...
/// assert_eq!(router.calls(), vec![(RepKind::Page, "/about/".to_owned())]);
/// ```
#[derive(Debug, Default)]
pub struct MockRouter {
    routes: RwLock<HashMap<(RepKind, String), String>>,
    calls: RwLock<Vec<(RepKind, String)>>,
}

impl MockRouter {
    /// Create a mock router with no routes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route page representations of `identifier` to `path`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, identifier: impl Into<String>, path: impl Into<String>) -> Self {
        self.routes
            .write()
            .unwrap()
            .insert((RepKind::Page, identifier.into()), path.into());
        self
    }

    /// Route asset representations of `identifier` to `path`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_asset(self, identifier: impl Into<String>, path: impl Into<String>) -> Self {
        self.routes
            .write()
            .unwrap()
            .insert((RepKind::Asset, identifier.into()), path.into());
        self
    }

    /// Every routing call so far, as `(kind, item identifier)`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<(RepKind, String)> {
        self.calls.read().unwrap().clone()
    }

    fn route(&self, kind: RepKind, rep: &Rep) -> Result<String, RouteError> {
        let identifier = rep.item.identifier().to_owned();
        self.calls.write().unwrap().push((kind, identifier.clone()));

        self.routes
            .read()
            .unwrap()
            .get(&(kind, identifier.clone()))
            .cloned()
            .ok_or_else(|| RouteError::Unroutable {
                identifier,
                message: format!("no {kind:?} route configured"),
            })
    }
}

impl Router for MockRouter {
    fn path_for_page_rep(&self, rep: &Rep) -> Result<String, RouteError> {
        self.route(RepKind::Page, rep)
    }

    fn path_for_asset_rep(&self, rep: &Rep) -> Result<String, RouteError> {
        self.route(RepKind::Asset, rep)
    }
}
