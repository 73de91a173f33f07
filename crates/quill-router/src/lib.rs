//! Representation routing for Quill.
//!
//! Every page or asset representation ends up in two places: a web path that
//! appears in generated links, and a disk path below the output directory.
//! This crate computes both.
//!
//! - [`Router`] is the contract a site implements to lay out its URLs
//! - [`BaseRouter`] implements the contract without overriding anything
//! - [`PathResolver`] combines custom paths, router output and index filename
//!   stripping into [`path_for`](PathResolver::path_for) (web) and
//!   [`raw_path_for`](PathResolver::raw_path_for) (disk)
//! - [`MockRouter`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use quill_router::{AttributeItem, PathResolver, Rep, RouteError, Router, SiteConfig};
//!
//! struct DirectoryRouter;
//!
//! impl Router for DirectoryRouter {
//!     fn path_for_page_rep(&self, rep: &Rep) -> Result<String, RouteError> {
//!         Ok(format!("{}index.html", rep.item.identifier()))
//!     }
//!
//!     fn path_for_asset_rep(&self, rep: &Rep) -> Result<String, RouteError> {
//!         Ok(rep.item.identifier().trim_end_matches('/').to_owned())
//!     }
//! }
//!
//! let site = Arc::new(SiteConfig::new("output"));
//! let resolver = PathResolver::new(Arc::new(DirectoryRouter), site);
//! let rep = Rep::page(Arc::new(AttributeItem::new("/about/")), "default");
//!
//! assert_eq!(resolver.path_for(&rep).unwrap(), "/about/");
//! assert_eq!(resolver.raw_path_for(&rep).unwrap(), "output/about/index.html");
//! ```

#[cfg(feature = "mock")]
mod mock;
mod rep;
mod resolver;
mod router;
mod site;

#[cfg(feature = "mock")]
pub use mock::MockRouter;
pub use rep::{AttributeItem, CUSTOM_PATH_ATTRIBUTE, Item, Rep, RepKind};
pub use resolver::{PathResolver, strip_index_filename};
pub use router::{BaseRouter, RouteError, Router};
pub use site::SiteConfig;
