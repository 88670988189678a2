//! Mapping from requested factory names to namespace identities.

use crate::namespace::{FactoryName, NamespaceId};
use serde::{Deserialize, Serialize};

/// Derives the namespace to look up for a requested name.
///
/// Must be deterministic: the same name always maps to the same namespace.
/// Any `Fn(&FactoryName) -> NamespaceId` closure qualifies.
pub trait NamingConvention: Send + Sync {
    fn namespace_for(&self, name: &FactoryName) -> NamespaceId;
}

impl<F> NamingConvention for F
where
    F: Fn(&FactoryName) -> NamespaceId + Send + Sync,
{
    fn namespace_for(&self, name: &FactoryName) -> NamespaceId {
        self(name)
    }
}

/// `"chevy_factory"` resolves to the namespace named `chevy_factory`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl NamingConvention for Identity {
    fn namespace_for(&self, name: &FactoryName) -> NamespaceId {
        NamespaceId::new(name.as_str())
    }
}

/// Appends a suffix unless the name already ends with it:
/// `"chevy"` and `"chevy_factory"` both resolve to `chevy_factory`.
#[derive(Debug, Clone)]
pub struct Suffixed {
    pub suffix: String,
}

impl Suffixed {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl NamingConvention for Suffixed {
    fn namespace_for(&self, name: &FactoryName) -> NamespaceId {
        let name = name.as_str();
        if name.ends_with(&self.suffix) {
            NamespaceId::new(name)
        } else {
            NamespaceId::new(format!("{name}{}", self.suffix))
        }
    }
}

/// Serializable choice of a built-in convention.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NamingConfig {
    #[default]
    Identity,
    Suffixed { suffix: String },
}

impl NamingConfig {
    pub fn build(&self) -> Box<dyn NamingConvention> {
        match self {
            NamingConfig::Identity => Box::new(Identity),
            NamingConfig::Suffixed { suffix } => Box::new(Suffixed::new(suffix.clone())),
        }
    }
}
