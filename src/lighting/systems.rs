// src/lighting/systems.rs
use bevy::prelude::*;

use super::mask::{mask_size, render_mask};
use super::types::{LightMask, LightOverlay, LightingSettings};
use crate::config::{ConfigSource, SandboxConfig};
use crate::events::{LightColorEvent, LightReloadEvent, LightSwitch, LightSwitchEvent};
use crate::input::CursorWorldPosition;
use crate::textures::procedural::rgba_image;

const OVERLAY_Z: f32 = 50.0;

// Startup-System: Maskenbild anlegen und als Sprite über die Szene legen
pub fn setup_light_overlay(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    config: Res<SandboxConfig>,
    settings: Res<LightingSettings>,
) {
    let scale = settings.config.mask_scale;
    let size = mask_size(config.window.size(), scale);
    let image = images.add(blank_mask(size));

    commands.spawn((
        LightOverlay,
        Sprite {
            image: image.clone(),
            custom_size: Some((size * scale).as_vec2()),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, OVERLAY_Z),
    ));
    commands.insert_resource(LightMask { image, size, scale });
    info!("Light mask created with {}x{} pixels", size.x, size.y);
}

pub fn apply_light_events(
    mut colors: EventReader<LightColorEvent>,
    mut switches: EventReader<LightSwitchEvent>,
    mut settings: ResMut<LightingSettings>,
) {
    if let Some(event) = colors.read().last() {
        settings.color = event.color;
    }
    for event in switches.read() {
        match event.switch {
            LightSwitch::Enabled => settings.enabled = event.value,
            LightSwitch::MouseLight => settings.mouse_light = event.value,
        }
    }
}

pub fn reload_lighting(
    mut events: EventReader<LightReloadEvent>,
    source: Res<ConfigSource>,
    mut settings: ResMut<LightingSettings>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    match source.reload_lighting() {
        Ok(config) => {
            settings.config = config;
            info!("Lighting settings reloaded");
        }
        Err(err) => error!("Keeping previous lighting settings: {err}"),
    }
}

/// Passt das Maskenbild an, wenn sich `mask_scale` geändert hat.
pub fn resize_light_mask(
    config: Res<SandboxConfig>,
    settings: Res<LightingSettings>,
    mut mask: ResMut<LightMask>,
    mut images: ResMut<Assets<Image>>,
    mut overlays: Query<&mut Sprite, With<LightOverlay>>,
) {
    let scale = settings.config.mask_scale;
    let size = mask_size(config.window.size(), scale);
    if size == mask.size && scale == mask.scale {
        return;
    }

    images.insert(&mask.image, blank_mask(size));
    mask.size = size;
    mask.scale = scale;
    for mut sprite in overlays.iter_mut() {
        sprite.custom_size = Some((size * scale).as_vec2());
    }
    info!("Light mask resized to {}x{} pixels", size.x, size.y);
}

pub fn update_overlay_visibility(
    settings: Res<LightingSettings>,
    mut overlays: Query<&mut Visibility, With<LightOverlay>>,
) {
    for mut visibility in overlays.iter_mut() {
        *visibility = if settings.enabled {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

pub fn render_light_mask(
    settings: Res<LightingSettings>,
    cursor: Res<CursorWorldPosition>,
    mask: Res<LightMask>,
    mut images: ResMut<Assets<Image>>,
) {
    if !settings.enabled {
        return;
    }
    let Some(image) = images.get_mut(&mask.image) else {
        warn!("Light mask image is missing");
        return;
    };

    let lights = settings.light_sources(cursor.0);
    render_mask(
        &mut image.data,
        mask.size,
        mask.scale,
        &lights,
        &settings.params(),
    );
}

fn blank_mask(size: UVec2) -> Image {
    rgba_image(size.x, size.y, vec![0; (size.x * size.y * 4) as usize])
}
