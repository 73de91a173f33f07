//! Identifier-keyed component registry.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::capability::{Capability, Constructor};
use crate::error::PluginError;

/// Registry key: capability kind plus identifier.
type Key = (&'static str, String);

/// Type-erased value stored per key (a `Constructor<C>` or an `Arc<C>`).
type Slot = Box<dyn Any + Send + Sync>;

/// Registry of named, swappable components.
///
/// Components are grouped by [`Capability::KIND`]; within a kind every
/// identifier maps to at most one [`Constructor`]. Instances built by
/// [`named`](Self::named) are memoized per identifier.
///
/// The registry is an ordinary value owned by the site being built, so two
/// builds in one process (or two tests) never see each other's components.
///
/// # Thread Safety
///
/// Registration is expected during setup, lookups during the build. Both
/// maps sit behind `RwLock`s so concurrent lookups only contend when an
/// instance is built for the first time.
#[derive(Default)]
pub struct PluginRegistry {
    constructors: RwLock<HashMap<Key, Slot>>,
    instances: RwLock<HashMap<Key, Slot>>,
}

impl PluginRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `constructor` under every identifier in `identifiers`.
    ///
    /// Re-registering an identifier replaces the previous component (last
    /// registration wins, it is never an error) and drops any instance cached
    /// for that identifier. Registering a clone of the constructor that is
    /// already in place changes nothing, including the cached instance.
    ///
    /// # Panics
    ///
    /// Panics if an internal `RwLock` is poisoned.
    pub fn register<C>(&self, constructor: Constructor<C>, identifiers: &[&str])
    where
        C: Capability + ?Sized,
    {
        let mut constructors = self.constructors.write().unwrap();
        let mut instances = self.instances.write().unwrap();

        for &identifier in identifiers {
            let key = (C::KIND, identifier.to_owned());

            let unchanged = constructors
                .get(&key)
                .and_then(|slot| slot.downcast_ref::<Constructor<C>>())
                .is_some_and(|existing| Arc::ptr_eq(existing, &constructor));
            if unchanged {
                continue;
            }

            let replaced = constructors
                .insert(key.clone(), Box::new(Arc::clone(&constructor)))
                .is_some();
            if replaced {
                instances.remove(&key);
                tracing::info!(kind = C::KIND, identifier, "Replaced component registration");
            } else {
                tracing::debug!(kind = C::KIND, identifier, "Registered component");
            }
        }
    }

    /// Find the constructor registered for `identifier`.
    ///
    /// Returns `None` when nothing was registered under that identifier for
    /// capability `C`. Use [`named`](Self::named) to turn that into an error.
    ///
    /// # Panics
    ///
    /// Panics if an internal `RwLock` is poisoned.
    #[must_use]
    pub fn find<C>(&self, identifier: &str) -> Option<Constructor<C>>
    where
        C: Capability + ?Sized,
    {
        self.constructors
            .read()
            .unwrap()
            .get(&(C::KIND, identifier.to_owned()))
            .and_then(|slot| slot.downcast_ref::<Constructor<C>>())
            .map(Arc::clone)
    }

    /// Get the instance for `identifier`, building it on first use.
    ///
    /// The first call builds the component with `context` and caches it; later
    /// calls return the same `Arc` until the identifier is re-registered or the
    /// cache is reset. `context` is only consulted when an instance is built.
    ///
    /// Constructors run without any registry lock held, so they may resolve
    /// other components from the same registry. If the identifier is
    /// re-registered while its constructor runs, the instance is returned but
    /// not cached; the next call builds from the new registration.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::NotFound`] if no component is registered under
    /// `identifier` for capability `C`.
    ///
    /// # Panics
    ///
    /// Panics if an internal `RwLock` is poisoned.
    pub fn named<C>(&self, identifier: &str, context: &C::Context) -> Result<Arc<C>, PluginError>
    where
        C: Capability + ?Sized,
    {
        let key = (C::KIND, identifier.to_owned());

        if let Some(instance) = self.cached::<C>(&key) {
            return Ok(instance);
        }

        let constructor = self
            .find::<C>(identifier)
            .ok_or_else(|| PluginError::NotFound {
                kind: C::KIND,
                identifier: identifier.to_owned(),
            })?;

        let built = constructor(context);
        tracing::debug!(kind = C::KIND, identifier, "Instantiated component");

        // Same lock order as `register`: constructors, then instances.
        let constructors = self.constructors.read().unwrap();
        let still_registered = constructors
            .get(&key)
            .and_then(|slot| slot.downcast_ref::<Constructor<C>>())
            .is_some_and(|current| Arc::ptr_eq(current, &constructor));
        if !still_registered {
            tracing::debug!(
                kind = C::KIND,
                identifier,
                "Registration changed while instantiating, not caching"
            );
            return Ok(built);
        }

        // Another thread may have built the same component meanwhile; keep
        // whichever landed first so every caller shares one instance.
        let mut instances = self.instances.write().unwrap();
        let slot = instances
            .entry(key)
            .or_insert_with(|| Box::new(Arc::clone(&built)));
        Ok(slot
            .downcast_ref::<Arc<C>>()
            .map_or(built, |instance| Arc::clone(instance)))
    }

    /// Identifiers registered for capability `C`, sorted.
    ///
    /// # Panics
    ///
    /// Panics if an internal `RwLock` is poisoned.
    #[must_use]
    pub fn identifiers<C>(&self) -> Vec<String>
    where
        C: Capability + ?Sized,
    {
        let mut identifiers: Vec<String> = self
            .constructors
            .read()
            .unwrap()
            .keys()
            .filter(|(kind, _)| *kind == C::KIND)
            .map(|(_, identifier)| identifier.clone())
            .collect();
        identifiers.sort_unstable();
        identifiers
    }

    /// Drop every memoized instance. Registrations are kept.
    ///
    /// # Panics
    ///
    /// Panics if an internal `RwLock` is poisoned.
    pub fn reset_cache(&self) {
        self.instances.write().unwrap().clear();
    }

    /// Drop every registration and memoized instance.
    ///
    /// # Panics
    ///
    /// Panics if an internal `RwLock` is poisoned.
    pub fn reset(&self) {
        self.constructors.write().unwrap().clear();
        self.instances.write().unwrap().clear();
    }

    fn cached<C>(&self, key: &Key) -> Option<Arc<C>>
    where
        C: Capability + ?Sized,
    {
        self.instances
            .read()
            .unwrap()
            .get(key)
            .and_then(|slot| slot.downcast_ref::<Arc<C>>())
            .map(Arc::clone)
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let constructors = self.constructors.read().map(|map| map.len()).unwrap_or(0);
        let instances = self.instances.read().map(|map| map.len()).unwrap_or(0);
        f.debug_struct("PluginRegistry")
            .field("constructors", &constructors)
            .field("instances", &instances)
            .finish()
    }
}
