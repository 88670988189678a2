//! # Vehicle Factory Namespaces
//!
//! One module per namespace. Each module exports:
//!
//! - `NAMESPACE` - the name the namespace is registered under
//! - `namespace()` - the namespace contents: the factory contract it re-exports,
//!   the vehicle type it builds, and exactly one concrete factory
//!
//! [`standard_registry`] registers the whole catalog. The branded namespaces are
//! registered as loaders and stay unloaded until something asks for them; the
//! fallback is registered from its prebuilt contents.
//! [`Showroom::new`](crate::lifecycle::Showroom::new) verifies the catalog, which
//! loads every namespace at startup.
//!
//! ```rust
//! use factory_sample::factories::standard_registry;
//! use factory_framework::NamespaceId;
//!
//! let registry = standard_registry();
//! let names: Vec<_> = registry.ids().into_iter().map(NamespaceId::as_str).collect();
//! assert_eq!(names, ["chevy_factory", "ford_factory", "jeep_factory", "null_factory"]);
//! ```

pub mod chevy_factory;
pub mod ford_factory;
pub mod jeep_factory;
pub mod null_factory;

pub use chevy_factory::ChevyFactory;
pub use ford_factory::FordFactory;
pub use jeep_factory::JeepFactory;
pub use null_factory::NullFactory;

use factory_framework::{FactoryNamespace, NamespaceRegistry};

/// Type name under which every namespace re-exports the factory contract.
pub const FACTORY_CONTRACT: &str = "VehicleFactory";

/// Registers every namespace in the catalog.
pub fn standard_registry() -> NamespaceRegistry {
    let mut registry = NamespaceRegistry::new();
    register_lazy(&mut registry, chevy_factory::NAMESPACE, chevy_factory::namespace);
    register_lazy(&mut registry, ford_factory::NAMESPACE, ford_factory::namespace);
    register_lazy(&mut registry, jeep_factory::NAMESPACE, jeep_factory::namespace);
    registry.register(null_factory::namespace());
    registry
}

fn register_lazy(registry: &mut NamespaceRegistry, id: &str, build: fn() -> FactoryNamespace) {
    registry.register_loader(id, move || Ok(build()));
}
