// src/physics/types.rs
use bevy::prelude::*;

use super::math::gravity_to_world;
use crate::config::SandboxConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyShape {
    Box,
    Circle,
}

/// Ein neuer Körper wurde angefordert.
///
/// Das Hinzufügen dieser Komponente löst Physik- und Textursysteme aus.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub position: Vec2,
    pub shape: BodyShape,
}

impl SpawnRequest {
    pub fn new(position: Vec2, shape: BodyShape) -> Self {
        Self { position, shape }
    }
}

/// Entität besitzt einen Rapier-Körper.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub shape: BodyShape,
    /// Halbe Kantenlänge (Box) bzw. Radius (Kreis) in Pixeln
    pub half_extent: f32,
}

/// Statische Wand am Fensterrand, existiert nur bei aktivierter Fensterkollision.
#[derive(Component, Debug, Default)]
pub struct WindowWall;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PhysicsSettings {
    pub window_collision: bool,
    /// Gewünschte Schwerkraft in Welteinheiten (Pixel/s², y nach oben)
    pub gravity: Vec2,
    pub pixels_per_meter: f32,
    pub body_size: f32,
    pub restitution: f32,
    pub friction: f32,
    /// Fenstergröße in Pixeln, bestimmt die Lage der Wände
    pub bounds: Vec2,
}

impl PhysicsSettings {
    pub fn from_config(config: &SandboxConfig) -> Self {
        let physics = &config.physics;
        let (x, y) = physics.initial_gravity;
        Self {
            window_collision: false,
            gravity: gravity_to_world(x, y, physics.pixels_per_meter),
            pixels_per_meter: physics.pixels_per_meter,
            body_size: physics.body_size,
            restitution: physics.restitution,
            friction: physics.friction,
            bounds: config.window.size(),
        }
    }

    /// Maximaler Abstand für das Entfernen per Mittelklick
    pub fn removal_radius(&self) -> f32 {
        self.body_size * 2.0
    }
}

impl FromWorld for PhysicsSettings {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<SandboxConfig>() {
            Some(config) => Self::from_config(config),
            None => Self::from_config(&SandboxConfig::default()),
        }
    }
}

/// Debug-Overlays aus dem Graphics-Bereich.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugDrawSettings {
    pub show_aabbs: bool,
    pub show_positions: bool,
}
