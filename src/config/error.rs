// src/config/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Fehler beim Laden der Konfigurationsdatei.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config file: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid config value `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}
