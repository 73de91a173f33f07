//! Site driver for Quill.
//!
//! [`Site`] owns the site settings and the [`PluginRegistry`] for one build.
//! Components are registered up front; the site then resolves the router,
//! VCS adapter and filters named in `quill.toml`:
//!
//! ```ignore
//! use std::sync::Arc;
//! use quill_plugin::constructor;
//! use quill_router::Router;
//! use quill_site::Site;
//!
//! let site = Site::load(None, None)?;
//! site.plugins().register(
//!     constructor::<dyn Router>(|site| Arc::new(MyRouter::new(Arc::clone(site)))),
//!     &["default"],
//! );
//!
//! let resolver = site.router()?;
//! for rep in reps {
//!     let web = resolver.path_for(&rep)?;
//!     let disk = resolver.raw_path_for(&rep)?;
//! }
//! ```
//!
//! [`PluginRegistry`]: quill_plugin::PluginRegistry

mod error;
mod site;

pub use error::SiteError;
pub use site::{OutputPaths, Site};
