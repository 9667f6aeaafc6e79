// src/physics/plugin.rs
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::debug_draw::draw_debug_overlay;
use super::systems::{
    apply_graphics_events, apply_gravity_changes, attach_bodies, clear_bodies,
    remove_nearest_body, sync_gravity, sync_window_walls,
};
use super::types::{DebugDrawSettings, PhysicsSettings};
use crate::config::SandboxConfig;
use crate::SandboxSet;

/// Rapier-Simulation plus die Anbindung an die Sandbox-Events.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        let pixels_per_meter = app
            .world()
            .get_resource::<SandboxConfig>()
            .map(|config| config.physics.pixels_per_meter)
            .unwrap_or_else(|| SandboxConfig::default().physics.pixels_per_meter);

        app.add_plugins((
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(pixels_per_meter),
            BodyPlugin,
        ))
        .add_systems(Update, draw_debug_overlay.in_set(SandboxSet::Physics));
    }
}

/// Reagiert auf Spawn-Anfragen und Events, ohne selbst zu simulieren.
///
/// Kommt ohne Fenster und Renderer aus und wird so auch in Tests verwendet.
pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsSettings>()
            .init_resource::<DebugDrawSettings>()
            .add_systems(
                Update,
                (
                    apply_graphics_events,
                    apply_gravity_changes,
                    sync_gravity,
                    attach_bodies,
                    remove_nearest_body,
                    clear_bodies,
                    sync_window_walls,
                )
                    .chain()
                    .in_set(SandboxSet::Physics),
            );
    }
}
