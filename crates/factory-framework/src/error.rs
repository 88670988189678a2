//! # Framework Errors
//!
//! This module defines the common error type used throughout the factory framework.
//! Resolution, namespace loading, and product construction all report through
//! [`FactoryError`], so callers match on one enum no matter which stage failed.

use crate::namespace::NamespaceId;

/// Boxed error produced by a concrete factory while building a vehicle.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while resolving factories or creating vehicles.
///
/// `NamespaceNotFound` and `NamespaceLoad` are recovered by the resolver
/// (it substitutes the fallback namespace); the remaining variants are
/// surfaced to the caller.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Namespace not registered: {0}")]
    NamespaceNotFound(NamespaceId),

    #[error("Namespace {namespace} failed to load: {reason}")]
    NamespaceLoad { namespace: NamespaceId, reason: String },

    #[error("Fallback namespace {namespace} unavailable: {source}")]
    FallbackUnavailable {
        namespace: NamespaceId,
        #[source]
        source: Box<FactoryError>,
    },

    #[error("No concrete factory found in namespace {namespace}")]
    NoQualifyingCandidate { namespace: NamespaceId },

    #[error("Namespace {namespace} exports several concrete factories: {}", .candidates.join(", "))]
    AmbiguousCandidate {
        namespace: NamespaceId,
        candidates: Vec<String>,
    },

    #[error("Factory {factory} failed to build a vehicle: {source}")]
    ProductConstruction {
        factory: String,
        #[source]
        source: BoxError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl FactoryError {
    /// Wraps a failure raised inside `create_auto`.
    pub fn construction(factory: impl Into<String>, source: impl Into<BoxError>) -> Self {
        FactoryError::ProductConstruction {
            factory: factory.into(),
            source: source.into(),
        }
    }

    /// Whether the resolver substitutes the fallback namespace for this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FactoryError::NamespaceNotFound(_) | FactoryError::NamespaceLoad { .. }
        )
    }
}

impl From<serde_json::Error> for FactoryError {
    fn from(e: serde_json::Error) -> Self {
        FactoryError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_lookup_failures_are_recoverable() {
        let missing = FactoryError::NamespaceNotFound(NamespaceId::new("tesla_factory"));
        assert!(missing.is_recoverable());

        let load = FactoryError::NamespaceLoad {
            namespace: NamespaceId::new("tesla_factory"),
            reason: "disk on fire".into(),
        };
        assert!(load.is_recoverable());

        let empty = FactoryError::NoQualifyingCandidate {
            namespace: NamespaceId::new("broken"),
        };
        assert!(!empty.is_recoverable());
    }

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let err = FactoryError::AmbiguousCandidate {
            namespace: NamespaceId::new("twin_factory"),
            candidates: vec!["AlphaFactory".into(), "BetaFactory".into()],
        };
        assert_eq!(
            err.to_string(),
            "Namespace twin_factory exports several concrete factories: AlphaFactory, BetaFactory"
        );
    }

    #[test]
    fn test_construction_keeps_source() {
        let err = FactoryError::construction("JeepFactory", "out of chassis");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("out of chassis"));
    }
}
