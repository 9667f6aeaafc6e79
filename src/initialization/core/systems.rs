// src/initialization/core/systems.rs
use bevy::prelude::*;

use crate::config::ConfigSource;

/// Die Kamera, über die Mauspositionen in Weltkoordinaten umgerechnet werden.
#[derive(Component, Debug, Default)]
pub struct MainCamera;

// Startup-System zum Erstellen der Kamera mit 4x Antialiasing
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d::default(), Msaa::Sample4, MainCamera));
    info!("Spawned main camera.");
}

pub fn log_config_source(source: Res<ConfigSource>) {
    match &source.path {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => warn!("No configuration file found, using built-in defaults."),
    }
}
