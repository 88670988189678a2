//! # Factory Framework
//!
//! This crate resolves a symbolic name to a concrete vehicle factory, falling back to
//! a designated default when the requested implementation cannot be found.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Capability Layer** ([`Vehicle`], [`VehicleFactory`]) - the contracts products and
//!    factories satisfy. Nothing else about a concrete type is visible to the resolver.
//! 2. **Discovery Layer** ([`FactoryNamespace`], [`NamespaceRegistry`]) - an explicit
//!    registration table from namespace names to their exported types. Namespaces are
//!    loaded on first use and memoized.
//! 3. **Resolution Layer** ([`FactoryResolver`], [`NamingConvention`]) - maps a requested
//!    name to a namespace, substitutes the fallback when that namespace is unavailable,
//!    and instantiates the single concrete factory it exports.
//!
//! ## Resolving a Factory
//!
//! ```rust
//! use factory_framework::mock::{MockFactory, RecordingSink};
//! use factory_framework::{FactoryNamespace, FactoryResolver, NamespaceRegistry, VehicleFactory};
//!
//! let registry = NamespaceRegistry::new()
//!     .with_namespace(FactoryNamespace::new("mock_factory").export_factory::<MockFactory>())
//!     .with_namespace(
//!         FactoryNamespace::new("null_factory")
//!             .export_factory_with("NullFactory", || Box::new(MockFactory::new("Unknown"))),
//!     );
//!
//! let resolver = FactoryResolver::builder(registry).build().unwrap();
//!
//! let mut sink = RecordingSink::new();
//! for name in ["mock_factory", "tesla_factory"] {
//!     let factory = resolver.resolve(name).unwrap();
//!     let mut car = factory.create_auto().unwrap();
//!     car.start(&mut sink);
//!     car.stop(&mut sink);
//! }
//!
//! assert_eq!(
//!     sink.messages(),
//!     vec!["Mock started", "Mock stopped", "Unknown started", "Unknown stopped"]
//! );
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`FactoryError`]. Lookup failures are absorbed by the
//! fallback; a namespace with no usable factory, an ambiguous namespace, and a failing
//! `create_auto` are always reported.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`RecordingSink`](mock::RecordingSink) for asserting on
//! emitted signals and factories that succeed or fail on demand.

pub mod config;
pub mod error;
pub mod mock;
pub mod namespace;
pub mod naming;
pub mod product;
pub mod registry;
pub mod resolver;
pub mod signal;

// Re-export core types for convenience
pub use config::ResolverConfig;
pub use error::{BoxError, FactoryError};
pub use namespace::{Export, FactoryName, FactoryNamespace, NamespaceId};
pub use naming::{Identity, NamingConfig, NamingConvention, Suffixed};
pub use product::{RunState, Vehicle, VehicleFactory};
pub use registry::NamespaceRegistry;
pub use resolver::{FactoryResolver, FactoryResolverBuilder, ResolvedFactory, TieBreak};
pub use signal::{Phase, Signal, SignalSink, TracingSink, WriterSink};
