//! # Factory Namespaces
//!
//! A [`FactoryNamespace`] is a named grouping of exported types, the unit the
//! resolver looks up by name. Exports come in three kinds:
//!
//! - [`Export::Factory`]: a concrete type implementing [`VehicleFactory`], with a
//!   zero-argument constructor. Only these are candidates for resolution.
//! - [`Export::AbstractFactory`]: a type that declares the factory contract but
//!   cannot be instantiated on its own.
//! - [`Export::Other`]: anything else living in the namespace (vehicle types,
//!   helpers). Ignored by the resolver.
//!
//! ```rust
//! use factory_framework::mock::FailingFactory;
//! use factory_framework::FactoryNamespace;
//!
//! let ns = FactoryNamespace::new("flaky_factory")
//!     .export_abstract("AbsFactory")
//!     .export_factory::<FailingFactory>();
//!
//! assert_eq!(ns.exports().len(), 2);
//! assert_eq!(ns.candidates().count(), 1);
//! ```

use crate::product::VehicleFactory;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

/// Caller-supplied name of the factory to resolve (e.g. `"chevy_factory"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactoryName(String);

impl FactoryName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FactoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FactoryName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FactoryName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Identity of a registered namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceId(String);

impl NamespaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NamespaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NamespaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Zero-argument constructor for a concrete factory.
pub type FactoryCtor = Arc<dyn Fn() -> Box<dyn VehicleFactory> + Send + Sync>;

/// One type exported by a namespace.
#[derive(Clone)]
pub enum Export {
    Factory {
        type_name: String,
        ctor: FactoryCtor,
    },
    AbstractFactory {
        type_name: String,
    },
    Other {
        type_name: String,
    },
}

impl Export {
    pub fn type_name(&self) -> &str {
        match self {
            Export::Factory { type_name, .. }
            | Export::AbstractFactory { type_name }
            | Export::Other { type_name } => type_name,
        }
    }

    /// Concrete and satisfies the factory contract.
    pub fn is_candidate(&self) -> bool {
        matches!(self, Export::Factory { .. })
    }
}

impl Debug for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Export::Factory { .. } => "Factory",
            Export::AbstractFactory { .. } => "AbstractFactory",
            Export::Other { .. } => "Other",
        };
        f.debug_struct(kind)
            .field("type_name", &self.type_name())
            .finish()
    }
}

/// A named grouping of exported types.
#[derive(Debug, Clone)]
pub struct FactoryNamespace {
    id: NamespaceId,
    exports: Vec<Export>,
}

impl FactoryNamespace {
    pub fn new(id: impl Into<NamespaceId>) -> Self {
        Self {
            id: id.into(),
            exports: Vec::new(),
        }
    }

    pub fn id(&self) -> &NamespaceId {
        &self.id
    }

    /// Exports in declaration order.
    pub fn exports(&self) -> &[Export] {
        &self.exports
    }

    /// Exports a concrete factory built through its `Default` impl.
    pub fn export_factory<F>(self) -> Self
    where
        F: VehicleFactory + Default + 'static,
    {
        self.export_factory_with(short_type_name::<F>(), || Box::new(F::default()))
    }

    /// Exports a concrete factory under an explicit type name.
    pub fn export_factory_with<C>(mut self, type_name: impl Into<String>, ctor: C) -> Self
    where
        C: Fn() -> Box<dyn VehicleFactory> + Send + Sync + 'static,
    {
        self.exports.push(Export::Factory {
            type_name: type_name.into(),
            ctor: Arc::new(ctor),
        });
        self
    }

    pub fn export_abstract(mut self, type_name: impl Into<String>) -> Self {
        self.exports.push(Export::AbstractFactory {
            type_name: type_name.into(),
        });
        self
    }

    /// Exports a type that is not a factory.
    pub fn export_type<T: ?Sized>(mut self) -> Self {
        self.exports.push(Export::Other {
            type_name: short_type_name::<T>().to_string(),
        });
        self
    }

    /// Concrete factory exports, in declaration order.
    pub fn candidates(&self) -> impl Iterator<Item = &Export> {
        self.exports.iter().filter(|e| e.is_candidate())
    }
}

/// Extracts the last path segment of a type name
/// (e.g. `"ChevyFactory"` instead of `"factory_sample::factories::chevy::ChevyFactory"`).
pub fn short_type_name<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
