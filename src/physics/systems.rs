// src/physics/systems.rs
use std::collections::HashSet;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::math::{gravity_to_world, nearest_within, wall_layout};
use super::types::{Body, BodyShape, DebugDrawSettings, PhysicsSettings, SpawnRequest, WindowWall};
use crate::events::{
    ClearBodiesEvent, EntityRemoveEvent, GraphicsEvent, GraphicsToggle, GravityChangeEvent,
};

const WALL_THICKNESS: f32 = 40.0;

/// Graphics-Checkboxen, die die Physik betreffen.
pub fn apply_graphics_events(
    mut events: EventReader<GraphicsEvent>,
    mut settings: ResMut<PhysicsSettings>,
    mut debug_draw: ResMut<DebugDrawSettings>,
) {
    for event in events.read() {
        match event.toggle {
            GraphicsToggle::WindowCollision => settings.window_collision = event.value,
            GraphicsToggle::ShowAabbs => debug_draw.show_aabbs = event.value,
            GraphicsToggle::ShowPositions => debug_draw.show_positions = event.value,
            GraphicsToggle::ImageRender | GraphicsToggle::RandomTextures => {}
        }
    }
}

pub fn apply_gravity_changes(
    mut events: EventReader<GravityChangeEvent>,
    mut settings: ResMut<PhysicsSettings>,
) {
    // Nur der letzte Wert im Frame zählt
    if let Some(event) = events.read().last() {
        settings.gravity = gravity_to_world(event.x, event.y, settings.pixels_per_meter);
    }
}

/// Überträgt die gewünschte Schwerkraft auf alle Rapier-Kontexte.
pub fn sync_gravity(settings: Res<PhysicsSettings>, mut configs: Query<&mut RapierConfiguration>) {
    for mut config in configs.iter_mut() {
        if config.gravity != settings.gravity {
            config.gravity = settings.gravity;
            info!("Gravity set to {}", settings.gravity);
        }
    }
}

pub fn attach_bodies(
    mut commands: Commands,
    settings: Res<PhysicsSettings>,
    requests: Query<(Entity, &SpawnRequest), Added<SpawnRequest>>,
) {
    for (entity, request) in requests.iter() {
        let size = settings.body_size;
        let collider = match request.shape {
            BodyShape::Box => Collider::cuboid(size, size),
            BodyShape::Circle => Collider::ball(size),
        };

        commands.entity(entity).insert((
            Body {
                shape: request.shape,
                half_extent: size,
            },
            RigidBody::Dynamic,
            collider,
            Restitution::coefficient(settings.restitution),
            Friction::coefficient(settings.friction),
            Transform::from_translation(request.position.extend(1.0)),
        ));
        debug!("Attached {:?} body to {:?}", request.shape, entity);
    }
}

pub fn remove_nearest_body(
    mut commands: Commands,
    mut events: EventReader<EntityRemoveEvent>,
    settings: Res<PhysicsSettings>,
    bodies: Query<(Entity, &Transform), With<Body>>,
) {
    let mut removed = HashSet::new();

    for event in events.read() {
        let candidates = bodies
            .iter()
            .filter(|(entity, _)| !removed.contains(entity))
            .map(|(entity, transform)| (entity, transform.translation.truncate()));

        match nearest_within(candidates, event.position(), settings.removal_radius()) {
            Some(entity) => {
                commands.entity(entity).despawn_recursive();
                removed.insert(entity);
                debug!("Removed body {:?}", entity);
            }
            None => debug!("No body close enough to ({}, {})", event.x, event.y),
        }
    }
}

pub fn clear_bodies(
    mut commands: Commands,
    mut events: EventReader<ClearBodiesEvent>,
    bodies: Query<Entity, With<SpawnRequest>>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let mut count = 0;
    for entity in bodies.iter() {
        commands.entity(entity).despawn_recursive();
        count += 1;
    }
    info!("Cleared {} bodies", count);
}

/// Erzeugt oder entfernt die Wände am Fensterrand.
pub fn sync_window_walls(
    mut commands: Commands,
    settings: Res<PhysicsSettings>,
    walls: Query<Entity, With<WindowWall>>,
) {
    if !settings.is_changed() {
        return;
    }

    let has_walls = !walls.is_empty();
    if settings.window_collision && !has_walls {
        for (center, half_size) in wall_layout(settings.bounds, WALL_THICKNESS) {
            commands.spawn((
                WindowWall,
                RigidBody::Fixed,
                Collider::cuboid(half_size.x, half_size.y),
                Transform::from_translation(center.extend(0.0)),
            ));
        }
        info!("Window collision enabled");
    } else if !settings.window_collision && has_walls {
        for entity in walls.iter() {
            commands.entity(entity).despawn_recursive();
        }
        info!("Window collision disabled");
    }
}
