//! Showroom configuration, loaded from JSON.

use crate::error::ShowroomError;
use factory_framework::{FactoryName, ResolverConfig, SignalSink, TracingSink, WriterSink};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming the config file when no CLI argument is given.
pub const CONFIG_ENV: &str = "SHOWROOM_CONFIG";

/// Where vehicle signals go during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// One plain line per signal on stdout.
    #[default]
    Stdout,
    /// One `info` event per signal, alongside the rest of the log.
    Tracing,
}

impl SinkKind {
    pub fn build(self) -> Box<dyn SignalSink> {
        match self {
            SinkKind::Stdout => Box::new(WriterSink::stdout()),
            SinkKind::Tracing => Box::new(TracingSink),
        }
    }
}

/// Settings for one showroom run.
///
/// ```json
/// {
///   "resolver": { "fallback": "null_factory", "tie_break": "reject" },
///   "requests": ["chevy_factory", "ford_factory", "tesla_factory"],
///   "sink": "tracing"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowroomConfig {
    pub resolver: ResolverConfig,
    /// Factory names to test-drive, in order.
    pub requests: Vec<FactoryName>,
    pub sink: SinkKind,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            requests: ["chevy_factory", "jeep_factory", "ford_factory", "tesla_factory"]
                .into_iter()
                .map(FactoryName::from)
                .collect(),
            sink: SinkKind::default(),
        }
    }
}

impl ShowroomConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShowroomError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ShowroomError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ShowroomError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Loads from the given path, or the [`CONFIG_ENV`] path, or falls back to defaults.
    pub fn discover(arg: Option<PathBuf>) -> Result<Self, ShowroomError> {
        match arg.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from)) {
            Some(path) => Self::load(path),
            None => {
                debug!("No config given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
