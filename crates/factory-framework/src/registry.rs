//! # Namespace Registry
//!
//! The explicit registration table behind the resolver. Each [`NamespaceId`] maps
//! to a loader closure that brings the namespace into scope.
//!
//! ## Loading Model
//!
//! Loading happens lazily on first use and is memoized per namespace. Each entry
//! owns its own mutex, which acts as the one-time initialization barrier: when
//! several threads hit a cold namespace at once, exactly one runs the loader and
//! the others wait for its result. A failed load is not memoized, so the next
//! request retries it.
//!
//! The registry only caches the *loaded namespace*. Picking a factory out of it
//! and instantiating that factory is redone by the resolver on every request.

use crate::error::{BoxError, FactoryError};
use crate::namespace::{FactoryNamespace, NamespaceId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Brings a namespace into scope.
pub type Loader = Box<dyn Fn() -> Result<FactoryNamespace, BoxError> + Send + Sync>;

struct Slot {
    loader: Loader,
    loaded: Mutex<Option<Arc<FactoryNamespace>>>,
}

impl Slot {
    fn new(loader: Loader) -> Self {
        Self {
            loader,
            loaded: Mutex::new(None),
        }
    }
}

/// Registration table mapping namespace identities to their loaders.
#[derive(Default)]
pub struct NamespaceRegistry {
    slots: HashMap<NamespaceId, Slot>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a namespace whose contents are already known.
    pub fn register(&mut self, namespace: FactoryNamespace) -> &mut Self {
        let id = namespace.id().clone();
        self.register_loader(id, move || Ok(namespace.clone()))
    }

    /// Registers a namespace loaded on first use by `loader`.
    ///
    /// Registering an id twice replaces the earlier entry, including any
    /// namespace it already loaded.
    ///
    /// # Deadlocks
    ///
    /// The loader runs while its namespace's entry is locked. A loader that calls
    /// [`load`](Self::load) for its own namespace, directly or through a resolver,
    /// never returns. Loading other namespaces from a loader is fine.
    pub fn register_loader<L>(&mut self, id: impl Into<NamespaceId>, loader: L) -> &mut Self
    where
        L: Fn() -> Result<FactoryNamespace, BoxError> + Send + Sync + 'static,
    {
        let id = id.into();
        if self.slots.insert(id.clone(), Slot::new(Box::new(loader))).is_some() {
            warn!(namespace = %id, "Namespace re-registered, previous entry replaced");
        } else {
            debug!(namespace = %id, "Namespace registered");
        }
        self
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with_namespace(mut self, namespace: FactoryNamespace) -> Self {
        self.register(namespace);
        self
    }

    pub fn contains(&self, id: &NamespaceId) -> bool {
        self.slots.contains_key(id)
    }

    /// Registered ids in lexical order.
    pub fn ids(&self) -> Vec<&NamespaceId> {
        let mut ids: Vec<_> = self.slots.keys().collect();
        ids.sort();
        ids
    }

    /// Whether `id` has been loaded already.
    pub fn is_loaded(&self, id: &NamespaceId) -> bool {
        self.slots.get(id).is_some_and(|slot| {
            slot.loaded
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .is_some()
        })
    }

    /// Loads `id`, running its loader only if no earlier load succeeded.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::NamespaceNotFound`] if `id` was never registered.
    /// - [`FactoryError::NamespaceLoad`] if the loader failed or returned a
    ///   namespace with a different id.
    pub fn load(&self, id: &NamespaceId) -> Result<Arc<FactoryNamespace>, FactoryError> {
        let slot = self
            .slots
            .get(id)
            .ok_or_else(|| FactoryError::NamespaceNotFound(id.clone()))?;

        // Held across the loader call: concurrent first users wait here.
        let mut loaded = slot.loaded.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(namespace) = loaded.as_ref() {
            debug!(namespace = %id, "Namespace already loaded");
            return Ok(Arc::clone(namespace));
        }

        let namespace = (slot.loader)().map_err(|e| FactoryError::NamespaceLoad {
            namespace: id.clone(),
            reason: e.to_string(),
        })?;
        if namespace.id() != id {
            return Err(FactoryError::NamespaceLoad {
                namespace: id.clone(),
                reason: format!("loader produced namespace {}", namespace.id()),
            });
        }

        let namespace = Arc::new(namespace);
        *loaded = Some(Arc::clone(&namespace));
        info!(namespace = %id, exports = namespace.exports().len(), "Namespace loaded");
        Ok(namespace)
    }
}

impl fmt::Debug for NamespaceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceRegistry")
            .field("namespaces", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_unregistered_namespace_is_not_found() {
        let registry = NamespaceRegistry::new();
        let err = registry.load(&NamespaceId::new("tesla_factory")).unwrap_err();
        assert!(matches!(
            err,
            FactoryError::NamespaceNotFound(id) if id.as_str() == "tesla_factory"
        ));
    }

    #[test]
    fn test_loader_runs_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let mut registry = NamespaceRegistry::new();
        registry.register_loader("lazy", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(FactoryNamespace::new("lazy"))
        });

        let id = NamespaceId::new("lazy");
        assert!(!registry.is_loaded(&id));
        let first = registry.load(&id).unwrap();
        let second = registry.load(&id).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(registry.is_loaded(&id));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_load_is_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let mut registry = NamespaceRegistry::new();
        registry.register_loader("flaky", move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err("not yet".into())
            } else {
                Ok(FactoryNamespace::new("flaky"))
            }
        });

        let id = NamespaceId::new("flaky");
        let err = registry.load(&id).unwrap_err();
        assert!(matches!(
            err,
            FactoryError::NamespaceLoad { ref reason, .. } if reason == "not yet"
        ));
        assert!(!registry.is_loaded(&id));

        assert!(registry.load(&id).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_loader_must_return_matching_id() {
        let mut registry = NamespaceRegistry::new();
        registry.register_loader("ford_factory", || Ok(FactoryNamespace::new("chevy_factory")));

        let err = registry.load(&NamespaceId::new("ford_factory")).unwrap_err();
        assert!(matches!(err, FactoryError::NamespaceLoad { .. }));
    }

    #[test]
    fn test_ids_are_sorted() {
        let registry = NamespaceRegistry::new()
            .with_namespace(FactoryNamespace::new("jeep_factory"))
            .with_namespace(FactoryNamespace::new("chevy_factory"))
            .with_namespace(FactoryNamespace::new("ford_factory"));

        let ids: Vec<_> = registry.ids().into_iter().map(NamespaceId::as_str).collect();
        assert_eq!(ids, vec!["chevy_factory", "ford_factory", "jeep_factory"]);
    }
}
