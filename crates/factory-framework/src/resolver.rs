//! # Factory Resolver
//!
//! Turns a requested [`FactoryName`] into a freshly constructed factory.
//!
//! ## Flow
//!
//! 1. Map the name to a [`NamespaceId`] through the configured [`NamingConvention`].
//! 2. Load that namespace from the [`NamespaceRegistry`]. If it is not registered
//!    or its loader fails, load the fallback namespace instead.
//! 3. Keep the exports that are concrete factories.
//! 4. Exactly one candidate is selected; none is an error, several are handled
//!    by the [`TieBreak`] policy.
//! 5. Call the candidate's zero-argument constructor and return the instance.
//!
//! A namespace that loads but exports no concrete factory is *not* rescued by
//! the fallback: it is a broken namespace, reported as
//! [`FactoryError::NoQualifyingCandidate`].
//!
//! ```rust
//! use factory_framework::mock::{MockFactory, RecordingSink};
//! use factory_framework::{FactoryNamespace, FactoryResolver, NamespaceRegistry};
//!
//! let registry = NamespaceRegistry::new()
//!     .with_namespace(
//!         FactoryNamespace::new("mock_factory")
//!             .export_abstract("AbsFactory")
//!             .export_factory::<MockFactory>(),
//!     )
//!     .with_namespace(
//!         FactoryNamespace::new("null_factory")
//!             .export_factory_with("NullFactory", || Box::new(MockFactory::new("Unknown"))),
//!     );
//! let resolver = FactoryResolver::builder(registry).build().unwrap();
//!
//! let resolved = resolver.resolve("mock_factory").unwrap();
//! assert_eq!(resolved.type_name(), "MockFactory");
//! assert!(!resolved.fell_back());
//!
//! let mut sink = RecordingSink::new();
//! let mut car = resolved.create_auto().unwrap();
//! car.start(&mut sink);
//! assert_eq!(sink.len(), 1);
//!
//! let fallback = resolver.resolve("tesla_factory").unwrap();
//! assert!(fallback.fell_back());
//! assert_eq!(fallback.namespace().as_str(), "null_factory");
//! ```

use crate::config::{ResolverConfig, DEFAULT_FALLBACK};
use crate::error::FactoryError;
use crate::naming::{Identity, NamingConvention};
use crate::namespace::{FactoryCtor, FactoryName, FactoryNamespace, NamespaceId};
use crate::product::VehicleFactory;
use crate::registry::NamespaceRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use tracing::{debug, info, warn};

/// What to do when a namespace exports more than one concrete factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Fail with [`FactoryError::AmbiguousCandidate`].
    #[default]
    Reject,
    /// Pick the lexically smallest type name.
    Lexical,
}

/// A factory produced by [`FactoryResolver::resolve`], with where it came from.
///
/// Derefs to the factory, so `resolved.create_auto()` works directly.
pub struct ResolvedFactory {
    requested: FactoryName,
    namespace: NamespaceId,
    type_name: String,
    fell_back: bool,
    factory: Box<dyn VehicleFactory>,
}

impl ResolvedFactory {
    pub fn requested(&self) -> &FactoryName {
        &self.requested
    }

    /// Namespace the factory was taken from (the fallback, if one was used).
    pub fn namespace(&self) -> &NamespaceId {
        &self.namespace
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether the requested namespace was unavailable and the fallback served it.
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }
}

impl Deref for ResolvedFactory {
    type Target = dyn VehicleFactory;

    fn deref(&self) -> &Self::Target {
        self.factory.as_ref()
    }
}

impl fmt::Debug for ResolvedFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFactory")
            .field("requested", &self.requested)
            .field("namespace", &self.namespace)
            .field("type_name", &self.type_name)
            .field("fell_back", &self.fell_back)
            .finish()
    }
}

/// Resolves factory names against a [`NamespaceRegistry`], with fallback.
pub struct FactoryResolver {
    registry: NamespaceRegistry,
    naming: Box<dyn NamingConvention>,
    fallback: NamespaceId,
    tie_break: TieBreak,
}

impl FactoryResolver {
    pub fn builder(registry: NamespaceRegistry) -> FactoryResolverBuilder {
        FactoryResolverBuilder::new(registry)
    }

    pub fn from_config(
        registry: NamespaceRegistry,
        config: &ResolverConfig,
    ) -> Result<Self, FactoryError> {
        Self::builder(registry)
            .naming_boxed(config.naming.build())
            .fallback(config.fallback.clone())
            .tie_break(config.tie_break)
            .build()
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    pub fn fallback(&self) -> &NamespaceId {
        &self.fallback
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Registered namespaces in lexical order.
    pub fn known_names(&self) -> Vec<&NamespaceId> {
        self.registry.ids()
    }

    /// Resolves `requested` to a new factory instance.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::FallbackUnavailable`] if the requested namespace could not
    ///   be loaded and neither could the fallback.
    /// - [`FactoryError::NoQualifyingCandidate`] if the namespace used exports no
    ///   concrete factory.
    /// - [`FactoryError::AmbiguousCandidate`] if it exports several and the
    ///   tie-break policy is [`TieBreak::Reject`].
    pub fn resolve(
        &self,
        requested: impl Into<FactoryName>,
    ) -> Result<ResolvedFactory, FactoryError> {
        let requested = requested.into();
        let wanted = self.naming.namespace_for(&requested);
        debug!(%requested, namespace = %wanted, "Resolving");

        let (namespace, fell_back) = match self.registry.load(&wanted) {
            Ok(namespace) => (namespace, false),
            Err(e) if e.is_recoverable() => {
                match &e {
                    FactoryError::NamespaceNotFound(_) => {
                        debug!(
                            %requested,
                            namespace = %wanted,
                            fallback = %self.fallback,
                            "Unknown namespace, using fallback"
                        )
                    }
                    _ => {
                        warn!(
                            %requested,
                            namespace = %wanted,
                            fallback = %self.fallback,
                            error = %e,
                            "Namespace unavailable, using fallback"
                        )
                    }
                }
                let namespace = self.registry.load(&self.fallback).map_err(|source| {
                    FactoryError::FallbackUnavailable {
                        namespace: self.fallback.clone(),
                        source: Box::new(source),
                    }
                })?;
                (namespace, true)
            }
            Err(e) => return Err(e),
        };

        let (type_name, ctor) = self.select(&namespace)?;
        let factory = ctor();
        info!(%requested, namespace = %namespace.id(), factory = type_name, fell_back, "Resolved");

        Ok(ResolvedFactory {
            requested,
            namespace: namespace.id().clone(),
            type_name: type_name.to_string(),
            fell_back,
            factory,
        })
    }

    /// Loads every registered namespace and checks each yields a factory.
    ///
    /// Returns the first failure, in lexical namespace order.
    pub fn verify(&self) -> Result<(), FactoryError> {
        for id in self.registry.ids() {
            let namespace = self.registry.load(id)?;
            let (type_name, _) = self.select(&namespace)?;
            debug!(namespace = %id, factory = type_name, "Verified");
        }
        Ok(())
    }

    fn select<'a>(
        &self,
        namespace: &'a FactoryNamespace,
    ) -> Result<(&'a str, &'a FactoryCtor), FactoryError> {
        use crate::namespace::Export;

        let mut candidates: Vec<(&'a str, &'a FactoryCtor)> = namespace
            .candidates()
            .filter_map(|export| match export {
                Export::Factory { type_name, ctor } => Some((type_name.as_str(), ctor)),
                _ => None,
            })
            .collect();
        candidates.sort_by(|a, b| a.0.cmp(b.0));

        match candidates.len() {
            0 => Err(FactoryError::NoQualifyingCandidate {
                namespace: namespace.id().clone(),
            }),
            1 => Ok(candidates[0]),
            _ => match self.tie_break {
                TieBreak::Reject => Err(FactoryError::AmbiguousCandidate {
                    namespace: namespace.id().clone(),
                    candidates: candidates.iter().map(|(name, _)| name.to_string()).collect(),
                }),
                TieBreak::Lexical => {
                    let chosen = candidates[0];
                    warn!(
                        namespace = %namespace.id(),
                        chosen = chosen.0,
                        count = candidates.len(),
                        "Several concrete factories, picking the lexically first"
                    );
                    Ok(chosen)
                }
            },
        }
    }
}

impl fmt::Debug for FactoryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryResolver")
            .field("registry", &self.registry)
            .field("fallback", &self.fallback)
            .field("tie_break", &self.tie_break)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FactoryResolver`].
pub struct FactoryResolverBuilder {
    registry: NamespaceRegistry,
    naming: Box<dyn NamingConvention>,
    fallback: NamespaceId,
    tie_break: TieBreak,
}

impl FactoryResolverBuilder {
    pub fn new(registry: NamespaceRegistry) -> Self {
        Self {
            registry,
            naming: Box::new(Identity),
            fallback: NamespaceId::new(DEFAULT_FALLBACK),
            tie_break: TieBreak::default(),
        }
    }

    pub fn naming(self, naming: impl NamingConvention + 'static) -> Self {
        self.naming_boxed(Box::new(naming))
    }

    pub fn naming_boxed(mut self, naming: Box<dyn NamingConvention>) -> Self {
        self.naming = naming;
        self
    }

    pub fn fallback(mut self, fallback: impl Into<NamespaceId>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// # Errors
    ///
    /// [`FactoryError::Config`] if the fallback namespace is not registered.
    pub fn build(self) -> Result<FactoryResolver, FactoryError> {
        if !self.registry.contains(&self.fallback) {
            return Err(FactoryError::Config(format!(
                "fallback namespace {} is not registered",
                self.fallback
            )));
        }
        Ok(FactoryResolver {
            registry: self.registry,
            naming: self.naming,
            fallback: self.fallback,
            tie_break: self.tie_break,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FailingFactory, MockFactory, RecordingSink};
    use crate::naming::Suffixed;

    fn mock(label: &'static str) -> impl Fn() -> Box<dyn VehicleFactory> + Send + Sync {
        move || -> Box<dyn VehicleFactory> { Box::new(MockFactory::new(label)) }
    }

    fn registry() -> NamespaceRegistry {
        NamespaceRegistry::new()
            .with_namespace(
                FactoryNamespace::new("alpha_factory")
                    .export_abstract("AbsFactory")
                    .export_factory_with("AlphaFactory", mock("Alpha")),
            )
            .with_namespace(
                FactoryNamespace::new("null_factory")
                    .export_factory_with("NullFactory", mock("Unknown")),
            )
    }

    #[test]
    fn test_resolves_registered_namespace() {
        let resolver = FactoryResolver::builder(registry()).build().unwrap();
        let resolved = resolver.resolve("alpha_factory").unwrap();

        assert_eq!(resolved.requested().as_str(), "alpha_factory");
        assert_eq!(resolved.namespace().as_str(), "alpha_factory");
        assert_eq!(resolved.type_name(), "AlphaFactory");
        assert!(!resolved.fell_back());
        assert_eq!(resolved.create_auto().unwrap().name(), "Alpha");
    }

    #[test]
    fn test_unknown_name_falls_back() {
        let resolver = FactoryResolver::builder(registry()).build().unwrap();
        let resolved = resolver.resolve("tesla_factory").unwrap();

        assert!(resolved.fell_back());
        assert_eq!(resolved.namespace().as_str(), "null_factory");
        assert_eq!(resolved.requested().as_str(), "tesla_factory");
    }

    #[test]
    fn test_failing_loader_falls_back() {
        let mut registry = registry();
        registry.register_loader("broken_disk", || Err("checksum mismatch".into()));
        let resolver = FactoryResolver::builder(registry).build().unwrap();

        let resolved = resolver.resolve("broken_disk").unwrap();
        assert!(resolved.fell_back());
        assert_eq!(resolved.type_name(), "NullFactory");
    }

    #[test]
    fn test_only_abstract_exports_is_an_error() {
        let registry = registry().with_namespace(
            FactoryNamespace::new("hollow_factory")
                .export_abstract("AbsFactory")
                .export_type::<MockFactory>(),
        );
        let resolver = FactoryResolver::builder(registry).build().unwrap();

        let err = resolver.resolve("hollow_factory").unwrap_err();
        assert!(matches!(
            err,
            FactoryError::NoQualifyingCandidate { ref namespace }
                if namespace.as_str() == "hollow_factory"
        ));
    }

    #[test]
    fn test_broken_fallback_is_an_error() {
        let registry = NamespaceRegistry::new()
            .with_namespace(FactoryNamespace::new("null_factory").export_abstract("AbsFactory"));
        let resolver = FactoryResolver::builder(registry).build().unwrap();

        let err = resolver.resolve("tesla_factory").unwrap_err();
        assert!(matches!(err, FactoryError::NoQualifyingCandidate { .. }));
    }

    #[test]
    fn test_unloadable_fallback_is_reported() {
        let mut registry = NamespaceRegistry::new();
        registry.register_loader("null_factory", || Err("gone".into()));
        let resolver = FactoryResolver::builder(registry).build().unwrap();

        let err = resolver.resolve("tesla_factory").unwrap_err();
        match err {
            FactoryError::FallbackUnavailable { namespace, source } => {
                assert_eq!(namespace.as_str(), "null_factory");
                assert!(matches!(*source, FactoryError::NamespaceLoad { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unregistered_fallback_rejected_at_build() {
        let err = FactoryResolver::builder(registry())
            .fallback("lemon_factory")
            .build()
            .unwrap_err();
        assert!(matches!(err, FactoryError::Config(_)));
    }

    fn twin_registry() -> NamespaceRegistry {
        registry().with_namespace(
            FactoryNamespace::new("twin_factory")
                .export_factory_with("ZetaFactory", mock("Zeta"))
                .export_factory_with("BetaFactory", mock("Beta")),
        )
    }

    #[test]
    fn test_ambiguous_rejected_by_default() {
        let resolver = FactoryResolver::builder(twin_registry()).build().unwrap();
        let err = resolver.resolve("twin_factory").unwrap_err();

        match err {
            FactoryError::AmbiguousCandidate { candidates, .. } => {
                assert_eq!(candidates, vec!["BetaFactory", "ZetaFactory"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lexical_tie_break_ignores_export_order() {
        let resolver = FactoryResolver::builder(twin_registry())
            .tie_break(TieBreak::Lexical)
            .build()
            .unwrap();

        for _ in 0..3 {
            let resolved = resolver.resolve("twin_factory").unwrap();
            assert_eq!(resolved.type_name(), "BetaFactory");
        }
    }

    #[test]
    fn test_naming_convention_is_applied() {
        let resolver = FactoryResolver::builder(registry())
            .naming(Suffixed::new("_factory"))
            .build()
            .unwrap();

        let resolved = resolver.resolve("alpha").unwrap();
        assert_eq!(resolved.namespace().as_str(), "alpha_factory");
        assert!(!resolved.fell_back());
    }

    #[test]
    fn test_construction_failure_propagates() {
        let registry = registry().with_namespace(
            FactoryNamespace::new("flaky_factory").export_factory::<FailingFactory>(),
        );
        let resolver = FactoryResolver::builder(registry).build().unwrap();

        let resolved = resolver.resolve("flaky_factory").unwrap();
        let err = resolved.create_auto().unwrap_err();
        assert!(matches!(
            err,
            FactoryError::ProductConstruction { ref factory, .. } if factory == "FailingFactory"
        ));
    }

    #[test]
    fn test_each_resolution_builds_a_new_factory() {
        let resolver = FactoryResolver::builder(registry()).build().unwrap();
        let first = resolver.resolve("alpha_factory").unwrap();
        let second = resolver.resolve("alpha_factory").unwrap();

        let mut a = first.create_auto().unwrap();
        let b = second.create_auto().unwrap();
        a.set_name("Renamed".into());
        assert_eq!(b.name(), "Alpha");

        let mut sink = RecordingSink::new();
        a.start(&mut sink);
        assert_eq!(sink.signals()[0].vehicle, "Renamed");
    }

    #[test]
    fn test_verify_reports_broken_namespace() {
        let resolver = FactoryResolver::builder(twin_registry()).build().unwrap();
        assert!(matches!(
            resolver.verify(),
            Err(FactoryError::AmbiguousCandidate { .. })
        ));

        let healthy = FactoryResolver::builder(registry()).build().unwrap();
        assert!(healthy.verify().is_ok());
        let names: Vec<_> = healthy.known_names().into_iter().map(NamespaceId::as_str).collect();
        assert_eq!(names, vec!["alpha_factory", "null_factory"]);
    }

    #[test]
    fn test_from_config() {
        let config =
            ResolverConfig::from_json(r#"{"naming":{"kind":"suffixed","suffix":"_factory"}}"#)
                .unwrap();
        let resolver = FactoryResolver::from_config(registry(), &config).unwrap();

        assert_eq!(resolver.fallback().as_str(), "null_factory");
        assert_eq!(resolver.tie_break(), TieBreak::Reject);
        assert_eq!(resolver.resolve("alpha").unwrap().type_name(), "AlphaFactory");
    }
}
