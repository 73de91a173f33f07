//! Router contract.

use std::sync::Arc;

use quill_plugin::{Capability, ContractError};

use crate::rep::Rep;
use crate::site::SiteConfig;

/// Routing error.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The router does not implement the requested operation.
    #[error(transparent)]
    NotImplemented(#[from] ContractError),
    /// A concrete router could not compute a path.
    #[error("Cannot route `{identifier}`: {message}")]
    Unroutable {
        /// Identifier of the item being routed.
        identifier: String,
        /// Router-specific reason.
        message: String,
    },
}

/// Computes routed paths for page and asset representations.
///
/// A routed path includes the filename and extension, starts with a slash and
/// is relative to the web root: it never contains the output directory.
/// Routers do not need to handle custom paths; [`PathResolver`](crate::PathResolver)
/// applies those before asking the router.
///
/// Both operations have default bodies that fail with
/// [`RouteError::NotImplemented`], so every concrete router must override them.
pub trait Router: Send + Sync {
    /// Routed path for a page representation (e.g. `/about/index.html`).
    fn path_for_page_rep(&self, _rep: &Rep) -> Result<String, RouteError> {
        Err(not_implemented::<Self>("path_for_page_rep"))
    }

    /// Routed path for an asset representation (e.g. `/style.css`).
    fn path_for_asset_rep(&self, _rep: &Rep) -> Result<String, RouteError> {
        Err(not_implemented::<Self>("path_for_asset_rep"))
    }
}

impl Capability for dyn Router {
    const KIND: &'static str = "router";
    type Context = Arc<SiteConfig>;
}

fn not_implemented<T: ?Sized>(operation: &'static str) -> RouteError {
    RouteError::NotImplemented(ContractError::new::<T>(
        <dyn Router as Capability>::KIND,
        operation,
    ))
}

/// Router that overrides nothing.
///
/// Holds the site it was created for like any other router, but every routing
/// call fails with [`RouteError::NotImplemented`].
#[derive(Debug, Clone)]
pub struct BaseRouter {
    site: Arc<SiteConfig>,
}

impl BaseRouter {
    /// Create a router for `site`.
    #[must_use]
    pub fn new(site: Arc<SiteConfig>) -> Self {
        Self { site }
    }

    /// Site this router was created for.
    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }
}

impl Router for BaseRouter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rep::AttributeItem;

    fn page() -> Rep {
        Rep::page(Arc::new(AttributeItem::new("/about/")), "default")
    }

    fn asset() -> Rep {
        Rep::asset(Arc::new(AttributeItem::new("/logo/")), "default")
    }

    static_assertions::assert_obj_safe!(Router);

    #[test]
    fn test_base_router_page_not_implemented() {
        let router = BaseRouter::new(Arc::new(SiteConfig::default()));

        let err = router.path_for_page_rep(&page()).unwrap_err();

        let RouteError::NotImplemented(contract) = &err else {
            panic!("Expected RouteError::NotImplemented, got {err:?}");
        };
        assert_eq!(contract.kind, "router");
        assert_eq!(contract.operation, "path_for_page_rep");
        assert!(contract.component.ends_with("BaseRouter"));
    }

    #[test]
    fn test_base_router_asset_not_implemented() {
        let router = BaseRouter::new(Arc::new(SiteConfig::default()));

        let err = router.path_for_asset_rep(&asset()).unwrap_err();

        assert!(
            matches!(&err, RouteError::NotImplemented(c) if c.operation == "path_for_asset_rep"),
            "Expected not implemented error, got {err:?}"
        );
        assert!(err.to_string().contains("path_for_asset_rep"));
    }

    #[test]
    fn test_base_router_through_trait_object() {
        let router: Arc<dyn Router> = Arc::new(BaseRouter::new(Arc::new(SiteConfig::default())));

        let err = router.path_for_page_rep(&page()).unwrap_err();

        assert!(err.to_string().contains("BaseRouter does not override"));
    }

    #[test]
    fn test_partial_router_fails_only_on_missing_operation() {
        struct PagesOnly;

        impl Router for PagesOnly {
            fn path_for_page_rep(&self, rep: &Rep) -> Result<String, RouteError> {
                Ok(format!("{}index.html", rep.item.identifier()))
            }
        }

        let router = PagesOnly;

        assert_eq!(router.path_for_page_rep(&page()).unwrap(), "/about/index.html");
        let err = router.path_for_asset_rep(&asset()).unwrap_err();
        assert!(err.to_string().contains("PagesOnly does not override `path_for_asset_rep`"));
    }

    #[test]
    fn test_base_router_keeps_site() {
        let router = BaseRouter::new(Arc::new(SiteConfig::new("public")));

        assert_eq!(router.site().output_dir, "public");
    }

    #[test]
    fn test_unroutable_display() {
        let err = RouteError::Unroutable {
            identifier: "/drafts/".to_owned(),
            message: "drafts are not published".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "Cannot route `/drafts/`: drafts are not published"
        );
    }
}
