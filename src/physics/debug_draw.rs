// src/physics/debug_draw.rs
use bevy::prelude::*;

use super::math::{body_aabb, z_rotation};
use super::types::{Body, DebugDrawSettings};

const AABB_COLOR: Color = Color::srgb(0.9, 0.2, 0.2);
const POSITION_COLOR: Color = Color::srgb(0.1, 0.4, 0.9);
const CROSS_SIZE: f32 = 6.0;

pub fn draw_debug_overlay(
    mut gizmos: Gizmos,
    settings: Res<DebugDrawSettings>,
    bodies: Query<(&Transform, &Body)>,
) {
    if !settings.show_aabbs && !settings.show_positions {
        return;
    }

    for (transform, body) in bodies.iter() {
        let position = transform.translation.truncate();

        if settings.show_aabbs {
            let aabb = body_aabb(body.shape, body.half_extent, position, z_rotation(transform));
            gizmos.linestrip_2d(
                [
                    aabb.min,
                    Vec2::new(aabb.max.x, aabb.min.y),
                    aabb.max,
                    Vec2::new(aabb.min.x, aabb.max.y),
                    aabb.min,
                ],
                AABB_COLOR,
            );
        }

        if settings.show_positions {
            gizmos.line_2d(
                position - Vec2::X * CROSS_SIZE,
                position + Vec2::X * CROSS_SIZE,
                POSITION_COLOR,
            );
            gizmos.line_2d(
                position - Vec2::Y * CROSS_SIZE,
                position + Vec2::Y * CROSS_SIZE,
                POSITION_COLOR,
            );
        }
    }
}
