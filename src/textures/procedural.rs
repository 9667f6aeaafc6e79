// src/textures/procedural.rs
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// RGBA-Pixel einer weißen Scheibe mit weicher Kante.
pub fn disk_pixels(size: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    let radius = size as f32 / 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let distance = (dx * dx + dy * dy).sqrt();
            // Ein Pixel breiter Übergang am Rand
            let coverage = (radius - distance + 0.5).clamp(0.0, 1.0);
            data.extend_from_slice(&[255, 255, 255, (coverage * 255.0).round() as u8]);
        }
    }
    data
}

pub fn disk_image(size: u32) -> Image {
    rgba_image(size, size, disk_pixels(size))
}

pub fn rgba_image(width: u32, height: u32, data: Vec<u8>) -> Image {
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(data: &[u8], size: u32, x: u32, y: u32) -> u8 {
        data[((y * size + x) * 4 + 3) as usize]
    }

    #[test]
    fn disk_is_opaque_inside_and_clear_in_corners() {
        let size = 32;
        let data = disk_pixels(size);
        assert_eq!(data.len(), (size * size * 4) as usize);

        assert_eq!(alpha_at(&data, size, 16, 16), 255);
        assert_eq!(alpha_at(&data, size, 0, 0), 0);
        assert_eq!(alpha_at(&data, size, 31, 31), 0);
    }

    #[test]
    fn disk_pixels_are_white() {
        let data = disk_pixels(8);
        assert!(data
            .chunks_exact(4)
            .all(|pixel| pixel[0] == 255 && pixel[1] == 255 && pixel[2] == 255));
    }
}
