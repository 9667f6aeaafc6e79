// src/config/types.rs
use bevy::prelude::*;
use serde::{Deserialize, Deserializer};

use super::ConfigError;

/// Gesamte Konfiguration der Sandbox, gelesen aus einer RON-Datei.
///
/// Jeder Schlüssel hat einen Standardwert, eine leere Datei `()` ist gültig.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SandboxConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub textures: TextureConfig,
    pub lighting: LightingConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Physics Sandbox".to_string(),
        }
    }
}

impl WindowConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Umrechnung zwischen Pixeln und Metern für Rapier
    pub pixels_per_meter: f32,
    /// Halbe Kantenlänge einer Box bzw. Radius eines Kreises in Pixeln
    pub body_size: f32,
    pub restitution: f32,
    pub friction: f32,
    /// Startwert der Schwerkraft-Regler (m/s², y nach unten)
    pub initial_gravity: (f32, f32),
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 32.0,
            body_size: 16.0,
            restitution: 0.3,
            friction: 0.5,
            initial_gravity: (0.0, 10.0),
        }
    }
}

/// Texturpfade relativ zum `assets`-Ordner.
///
/// Listen dürfen auch als ein einzelner, durch `:` getrennter String angegeben werden.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TextureConfig {
    #[serde(deserialize_with = "texture_list")]
    pub boxes: Vec<String>,
    #[serde(deserialize_with = "texture_list")]
    pub balls: Vec<String>,
    pub background: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Reichweite des Mauslichts in Pixeln
    pub radius: f32,
    /// Farbe der unbeleuchteten Bereiche
    pub ambient: [u8; 3],
    /// Deckkraft der Maske ohne Licht (0..=1)
    pub darkness: f32,
    /// Deckkraft der Lichtfarbe im Zentrum eines Lichts (0..=1)
    pub glow: f32,
    /// Ein Maskenpixel deckt `mask_scale` x `mask_scale` Bildschirmpixel ab
    pub mask_scale: u32,
    pub lights: Vec<StaticLightConfig>,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            radius: 220.0,
            ambient: [12, 12, 28],
            darkness: 0.7,
            glow: 0.35,
            mask_scale: 4,
            lights: Vec::new(),
        }
    }
}

/// Fest platziertes Licht in Weltkoordinaten.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StaticLightConfig {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub radius: Option<f32>,
    #[serde(default = "white")]
    pub color: [u8; 3],
}

fn white() -> [u8; 3] {
    [255, 255, 255]
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextureList {
    Joined(String),
    List(Vec<String>),
}

fn texture_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let paths = match TextureList::deserialize(deserializer)? {
        TextureList::Joined(joined) => split_texture_list(&joined),
        TextureList::List(list) => list,
    };
    Ok(paths)
}

/// Zerlegt eine durch Doppelpunkte getrennte Liste, leere Einträge entfallen.
pub fn split_texture_list(joined: &str) -> Vec<String> {
    joined
        .split(':')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}

impl SandboxConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: SandboxConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                key: "window",
                reason: format!(
                    "size must be positive, got {}x{}",
                    self.window.width, self.window.height
                ),
            });
        }
        for (key, value) in [
            ("physics.body_size", self.physics.body_size),
            ("physics.pixels_per_meter", self.physics.pixels_per_meter),
            ("lighting.radius", self.lighting.radius),
        ] {
            ensure_positive(key, value)?;
        }
        if self.lighting.mask_scale == 0 {
            return Err(ConfigError::Invalid {
                key: "lighting.mask_scale",
                reason: "must be at least 1".to_string(),
            });
        }
        for (key, value) in [
            ("lighting.darkness", self.lighting.darkness),
            ("lighting.glow", self.lighting.glow),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    key,
                    reason: format!("must be within 0..=1, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Lehnt auch `NaN` und Unendlich ab, beides akzeptiert RON.
fn ensure_positive(key: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}
