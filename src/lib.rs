// src/lib.rs

// Top-Level Module für Features
pub mod config;
pub mod events;
pub mod gui;
pub mod initialization;
pub mod input;
pub mod lighting;
pub mod physics;
pub mod textures;

// Konstanten für den Zufallsgenerator
pub const FIXED_SEED: u64 = 1234567890;
pub const USE_FIXED_SEED: bool = false;

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

use config::{ConfigSource, SandboxConfig};

/// Reihenfolge der Subsysteme innerhalb eines Frames.
///
/// Entspricht der festen Update-Reihenfolge: Eingabe, Physik, Texturen,
/// Licht und zuletzt das Kontrollfenster.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SandboxSet {
    Input,
    Physics,
    Textures,
    Lighting,
    Gui,
}

/// Registriert die Konfiguration und die Set-Reihenfolge.
///
/// Wird von jedem Subsystem-Plugin vorausgesetzt; in Tests kann es ohne
/// `DefaultPlugins` verwendet werden.
pub struct SandboxCorePlugin {
    pub config: SandboxConfig,
    pub source: ConfigSource,
}

impl Plugin for SandboxCorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(self.source.clone())
            .configure_sets(
                Update,
                (
                    SandboxSet::Input,
                    SandboxSet::Physics,
                    SandboxSet::Textures,
                    SandboxSet::Lighting,
                    SandboxSet::Gui,
                )
                    .chain(),
            );
    }
}

/// Alle Plugins der Sandbox in der richtigen Reihenfolge.
pub struct SandboxPlugins {
    config: SandboxConfig,
    source: ConfigSource,
}

impl SandboxPlugins {
    pub fn new(config: SandboxConfig, source: ConfigSource) -> Self {
        Self { config, source }
    }
}

impl PluginGroup for SandboxPlugins {
    fn build(self) -> PluginGroupBuilder {
        let group = PluginGroupBuilder::start::<Self>()
            .add(initialization::CorePlugin {
                window: self.config.window.clone(),
            })
            .add(SandboxCorePlugin {
                config: self.config,
                source: self.source,
            })
            .add(initialization::EventPlugin)
            .add(input::PointerInputPlugin)
            .add(physics::PhysicsPlugin)
            .add(textures::TexturePlugin)
            .add(lighting::LightingPlugin)
            .add(gui::GuiPlugin);

        #[cfg(feature = "inspector")]
        let group = group.add(initialization::DebugPlugin);

        group
    }
}
