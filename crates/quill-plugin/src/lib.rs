//! Named component registry for Quill.
//!
//! Routers, version control adapters and filters are swappable components
//! that a site selects by identifier (e.g. `router = "default"` in
//! `quill.toml`). This crate provides the pieces they share:
//!
//! - [`Capability`] ties a component trait object (`dyn Router`, `dyn Filter`, ...)
//!   to a capability kind name and the context its constructors receive
//! - [`PluginRegistry`] maps `(kind, identifier)` to a [`Constructor`] and
//!   memoizes the instances it builds
//! - [`ContractError`] is returned by component traits for operations a
//!   concrete component does not override
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use quill_plugin::{Capability, PluginRegistry, constructor};
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! impl Capability for dyn Greeter {
//!     const KIND: &'static str = "greeter";
//!     type Context = ();
//! }
//!
//! struct Hello;
//!
//! impl Greeter for Hello {
//!     fn greet(&self) -> String {
//!         "hello".to_owned()
//!     }
//! }
//!
//! let registry = PluginRegistry::new();
//! registry.register(constructor::<dyn Greeter>(|()| Arc::new(Hello)), &["hello", "hi"]);
//!
//! let greeter = registry.named::<dyn Greeter>("hi", &()).unwrap();
//! assert_eq!(greeter.greet(), "hello");
//! ```

mod capability;
mod error;
mod registry;

pub use capability::{Capability, Constructor, constructor};
pub use error::{ContractError, PluginError};
pub use registry::PluginRegistry;
