// src/initialization/core/plugin.rs
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rand::prelude::{EntropyPlugin, WyRand};

use crate::config::WindowConfig;
use crate::{FIXED_SEED, USE_FIXED_SEED};

use super::systems::{log_config_source, setup_camera};

/// Fenster, Logging, Zufallsgenerator und Kamera.
pub struct CorePlugin {
    pub window: WindowConfig,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            DefaultPlugins
                .set(AssetPlugin {
                    watch_for_changes_override: Some(true),
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: self.window.title.clone(),
                        resolution: WindowResolution::new(
                            self.window.width as f32,
                            self.window.height as f32,
                        ),
                        // Nur Titelleiste und Schließen-Knopf
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_render=info,bevy_app=info".to_string(),
                    ..default()
                }),
        );

        // --- bevy_rand Plugin hinzufügen ---
        if USE_FIXED_SEED {
            app.add_plugins(EntropyPlugin::<WyRand>::with_seed(FIXED_SEED.to_le_bytes()));
            info!("Using fixed RNG seed: {}", FIXED_SEED);
        } else {
            app.add_plugins(EntropyPlugin::<WyRand>::default());
            info!("Using system entropy for RNG seed.");
        }

        // Der Hintergrund wird in jedem Frame weiß gelöscht
        app.insert_resource(ClearColor(Color::WHITE))
            .add_systems(Startup, (setup_camera, log_config_source));
    }
}
