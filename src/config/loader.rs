// src/config/loader.rs
use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;

use super::{ConfigError, LightingConfig, SandboxConfig};

/// Wird verwendet, wenn kein Pfad auf der Kommandozeile angegeben wurde.
pub const DEFAULT_CONFIG_PATH: &str = "config.ron";

/// Woher die aktuelle Konfiguration stammt; `None` bedeutet Standardwerte.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ConfigSource {
    pub path: Option<PathBuf>,
}

impl SandboxConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }
}

impl ConfigSource {
    /// Liest nur den Lichtabschnitt erneut ein (für "Reload Light").
    pub fn reload_lighting(&self) -> Result<LightingConfig, ConfigError> {
        match &self.path {
            Some(path) => Ok(SandboxConfig::load(path)?.lighting),
            None => Ok(LightingConfig::default()),
        }
    }
}

/// Lädt die Konfiguration vom angegebenen Pfad.
///
/// Ein explizit angegebener Pfad muss existieren. Ohne Pfad wird
/// `config.ron` versucht und bei Fehlen auf Standardwerte zurückgegriffen.
pub fn load_or_default(
    path: Option<PathBuf>,
) -> Result<(SandboxConfig, ConfigSource), ConfigError> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    if !required && !path.exists() {
        return Ok((SandboxConfig::default(), ConfigSource::default()));
    }

    let config = SandboxConfig::load(&path)?;
    Ok((config, ConfigSource { path: Some(path) }))
}
