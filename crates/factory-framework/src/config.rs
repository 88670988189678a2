//! # Resolver Configuration
//!
//! Serializable settings for [`FactoryResolver`](crate::FactoryResolver). Every
//! field has a default, so `{}` is a valid configuration:
//!
//! ```json
//! {
//!   "fallback": "null_factory",
//!   "tie_break": "reject",
//!   "naming": { "kind": "identity" }
//! }
//! ```

use crate::error::FactoryError;
use crate::naming::NamingConfig;
use crate::namespace::NamespaceId;
use crate::resolver::TieBreak;
use serde::{Deserialize, Serialize};

/// Namespace used when none is configured.
pub const DEFAULT_FALLBACK: &str = "null_factory";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Namespace substituted when the requested one cannot be loaded.
    pub fallback: NamespaceId,
    pub tie_break: TieBreak,
    pub naming: NamingConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback: NamespaceId::new(DEFAULT_FALLBACK),
            tie_break: TieBreak::default(),
            naming: NamingConfig::default(),
        }
    }
}

impl ResolverConfig {
    pub fn from_json(json: &str) -> Result<Self, FactoryError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let cfg = ResolverConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ResolverConfig::default());
        assert_eq!(cfg.fallback.as_str(), "null_factory");
        assert_eq!(cfg.tie_break, TieBreak::Reject);
    }

    #[test]
    fn test_full_config_parses() {
        let cfg = ResolverConfig::from_json(
            r#"{
                "fallback": "lemon_factory",
                "tie_break": "lexical",
                "naming": { "kind": "suffixed", "suffix": "_factory" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.fallback.as_str(), "lemon_factory");
        assert_eq!(cfg.tie_break, TieBreak::Lexical);
        assert_eq!(
            cfg.naming,
            NamingConfig::Suffixed {
                suffix: "_factory".into()
            }
        );
    }

    #[test]
    fn test_unknown_tie_break_is_config_error() {
        let err = ResolverConfig::from_json(r#"{"tie_break":"random"}"#).unwrap_err();
        assert!(matches!(err, FactoryError::Config(_)));
    }
}
