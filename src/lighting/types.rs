// src/lighting/types.rs
use bevy::prelude::*;

use super::mask::{LightSource, MaskParams};
use crate::config::{LightingConfig, SandboxConfig};

/// Aktueller Zustand des Lichts (Kontrollfenster + Konfiguration).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LightingSettings {
    pub enabled: bool,
    pub mouse_light: bool,
    /// Farbe des Mauslichts aus den RGB-Reglern
    pub color: [u8; 3],
    pub config: LightingConfig,
}

impl LightingSettings {
    pub fn from_config(config: &LightingConfig) -> Self {
        Self {
            enabled: true,
            mouse_light: true,
            color: [255, 255, 255],
            config: config.clone(),
        }
    }

    pub fn params(&self) -> MaskParams {
        MaskParams {
            ambient: self.config.ambient,
            darkness: self.config.darkness,
            glow: self.config.glow,
        }
    }

    /// Alle aktiven Lichter, das Mauslicht zuerst.
    pub fn light_sources(&self, cursor: Option<Vec2>) -> Vec<LightSource> {
        let mouse = cursor
            .filter(|_| self.mouse_light)
            .map(|position| LightSource {
                position,
                radius: self.config.radius,
                color: self.color,
            });

        let fixed = self.config.lights.iter().map(|light| LightSource {
            position: Vec2::new(light.x, light.y),
            radius: light.radius.unwrap_or(self.config.radius),
            color: light.color,
        });

        mouse.into_iter().chain(fixed).collect()
    }
}

impl FromWorld for LightingSettings {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<SandboxConfig>() {
            Some(config) => Self::from_config(&config.lighting),
            None => Self::from_config(&LightingConfig::default()),
        }
    }
}

/// Das Bild der Lichtmaske und seine Auflösung.
#[derive(Resource, Debug, Clone)]
pub struct LightMask {
    pub image: Handle<Image>,
    pub size: UVec2,
    pub scale: u32,
}

#[derive(Component, Debug, Default)]
pub struct LightOverlay;
