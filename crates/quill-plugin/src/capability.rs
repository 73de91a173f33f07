//! Capability kinds.

use std::sync::Arc;

/// A category of pluggable component.
///
/// Implemented for the trait object of each component contract, e.g.
/// `impl Capability for dyn Router`. The kind name namespaces identifiers in
/// [`PluginRegistry`](crate::PluginRegistry), so a router and a filter may
/// both be registered as `"default"` without clashing.
pub trait Capability: Send + Sync + 'static {
    /// Capability kind name (e.g. `"router"`, `"vcs"`).
    const KIND: &'static str;

    /// Value handed to constructors when an instance is built.
    ///
    /// Routers receive the site configuration; components that need nothing
    /// use `()`.
    type Context: ?Sized + 'static;
}

/// Builds a component instance from its capability context.
///
/// Constructors are shared handles: registering a clone of the same
/// `Constructor` again is recognized as an identical registration.
pub type Constructor<C> = Arc<dyn Fn(&<C as Capability>::Context) -> Arc<C> + Send + Sync>;

/// Wrap a closure as a [`Constructor`] for capability `C`.
///
/// Naming the capability up front lets the closure's argument and return
/// types be inferred, including the coercion to the trait object:
///
/// ```
/// use std::sync::Arc;
/// use quill_plugin::{Capability, constructor};
///
/// trait Named: Send + Sync {}
/// impl Capability for dyn Named {
///     const KIND: &'static str = "named";
///     type Context = str;
/// }
///
/// struct Plain;
/// impl Named for Plain {}
///
/// let build = constructor::<dyn Named>(|_name| Arc::new(Plain));
/// let _instance = build("plain");
/// ```
pub fn constructor<C>(
    build: impl Fn(&C::Context) -> Arc<C> + Send + Sync + 'static,
) -> Constructor<C>
where
    C: Capability + ?Sized,
{
    Arc::new(build)
}
