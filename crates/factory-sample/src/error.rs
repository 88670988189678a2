//! Error types for the showroom.

use factory_framework::FactoryError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running the showroom.
#[derive(Debug, Error)]
pub enum ShowroomError {
    /// Resolution or vehicle construction failed.
    #[error(transparent)]
    Factory(#[from] FactoryError),

    /// The configuration file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not a valid
    /// [`ShowroomConfig`](crate::lifecycle::ShowroomConfig) document.
    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
