// src/lighting/mask.rs
//! CPU-Lichtmaske: ein niedrig aufgelöstes RGBA-Bild, das über die Szene
//! gelegt wird und sie außerhalb der Lichter abdunkelt.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    pub position: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskParams {
    pub ambient: [u8; 3],
    pub darkness: f32,
    pub glow: f32,
}

/// Quadratischer Abfall von 1 im Zentrum auf 0 am Rand.
pub fn falloff(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 || distance >= radius {
        return 0.0;
    }
    let t = 1.0 - distance / radius;
    t * t
}

/// Maskengröße, die das Fenster vollständig abdeckt.
pub fn mask_size(window: Vec2, scale: u32) -> UVec2 {
    let scale = scale.max(1) as f32;
    UVec2::new(
        ((window.x / scale).ceil() as u32).max(1),
        ((window.y / scale).ceil() as u32).max(1),
    )
}

/// Weltposition der Mitte eines Maskenpixels (Zeile 0 ist oben).
pub fn pixel_to_world(x: u32, y: u32, size: UVec2, scale: u32) -> Vec2 {
    let scale = scale as f32;
    let half = size.as_vec2() * scale / 2.0;
    Vec2::new(
        (x as f32 + 0.5) * scale - half.x,
        half.y - (y as f32 + 0.5) * scale,
    )
}

/// Farbe und Deckkraft der Maske an einem Punkt.
pub fn shade(point: Vec2, lights: &[LightSource], params: &MaskParams) -> [u8; 4] {
    let mut total = 0.0;
    let mut mixed = Vec3::ZERO;
    for light in lights {
        let weight = falloff(point.distance(light.position), light.radius);
        if weight > 0.0 {
            total += weight;
            mixed += rgb(light.color) * weight;
        }
    }

    let ambient = rgb(params.ambient);
    let intensity = total.min(1.0);
    let light_color = if total > 0.0 { mixed / total } else { ambient };

    let color = ambient.lerp(light_color, intensity);
    let alpha = params.darkness + (params.glow - params.darkness) * intensity;
    [
        to_byte(color.x),
        to_byte(color.y),
        to_byte(color.z),
        to_byte(alpha),
    ]
}

/// Schreibt die komplette Maske in `data` (RGBA8, zeilenweise).
pub fn render_mask(
    data: &mut [u8],
    size: UVec2,
    scale: u32,
    lights: &[LightSource],
    params: &MaskParams,
) {
    debug_assert_eq!(data.len(), (size.x * size.y * 4) as usize);

    for (index, pixel) in data.chunks_exact_mut(4).enumerate() {
        let x = index as u32 % size.x;
        let y = index as u32 / size.x;
        let point = pixel_to_world(x, y, size, scale);
        pixel.copy_from_slice(&shade(point, lights, params));
    }
}

fn rgb(color: [u8; 3]) -> Vec3 {
    Vec3::new(color[0] as f32, color[1] as f32, color[2] as f32) / 255.0
}

fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
