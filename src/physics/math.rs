// src/physics/math.rs
use bevy::math::Rect;
use bevy::prelude::*;

use super::BodyShape;

/// Reglerwerte (m/s², y nach unten) in Rapier-Schwerkraft (Pixel/s², y nach oben).
pub fn gravity_to_world(x: f32, y: f32, pixels_per_meter: f32) -> Vec2 {
    Vec2::new(x, -y) * pixels_per_meter
}

/// Sucht den Kandidaten, der `target` am nächsten liegt.
///
/// Gibt ihn nur zurück, wenn der Abstand echt kleiner als `max_distance` ist.
pub fn nearest_within<T, I>(candidates: I, target: Vec2, max_distance: f32) -> Option<T>
where
    I: IntoIterator<Item = (T, Vec2)>,
{
    candidates
        .into_iter()
        .map(|(item, position)| (item, position.distance(target)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .filter(|(_, distance)| *distance < max_distance)
        .map(|(item, _)| item)
}

/// Achsenparallele Hülle eines (gedrehten) Körpers.
pub fn body_aabb(shape: BodyShape, half_extent: f32, position: Vec2, rotation: f32) -> Rect {
    let half = match shape {
        BodyShape::Circle => Vec2::splat(half_extent),
        BodyShape::Box => {
            let (sin, cos) = rotation.sin_cos();
            let extent = half_extent * (cos.abs() + sin.abs());
            Vec2::splat(extent)
        }
    };
    Rect::from_center_half_size(position, half)
}

/// Ecken einer gedrehten Box, gegen den Uhrzeigersinn.
pub fn box_corners(half_extent: f32, position: Vec2, rotation: f32) -> [Vec2; 4] {
    let rot = Vec2::from_angle(rotation);
    [
        Vec2::new(-half_extent, -half_extent),
        Vec2::new(half_extent, -half_extent),
        Vec2::new(half_extent, half_extent),
        Vec2::new(-half_extent, half_extent),
    ]
    .map(|corner| position + rot.rotate(corner))
}

/// Mittelpunkte und halbe Größen der vier Wände außerhalb des sichtbaren Bereichs.
pub fn wall_layout(bounds: Vec2, thickness: f32) -> [(Vec2, Vec2); 4] {
    let half = bounds / 2.0;
    let t = thickness / 2.0;
    [
        (Vec2::new(0.0, -half.y - t), Vec2::new(half.x + thickness, t)),
        (Vec2::new(0.0, half.y + t), Vec2::new(half.x + thickness, t)),
        (Vec2::new(-half.x - t, 0.0), Vec2::new(t, half.y + thickness)),
        (Vec2::new(half.x + t, 0.0), Vec2::new(t, half.y + thickness)),
    ]
}

/// Drehwinkel um die z-Achse in Radiant.
pub fn z_rotation(transform: &Transform) -> f32 {
    transform.rotation.to_euler(EulerRot::ZYX).0
}
