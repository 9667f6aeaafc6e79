// src/textures/systems.rs
use bevy::math::Isometry2d;
use bevy::prelude::*;
use bevy_rand::prelude::{Entropy, GlobalEntropy, WyRand};

use super::procedural::disk_image;
use super::types::{
    choose_texture, fallback_tint, BackgroundSprite, BodyTexture, TextureLibrary, TextureSettings,
};
use crate::config::SandboxConfig;
use crate::events::{GraphicsEvent, GraphicsToggle};
use crate::physics::math::{box_corners, z_rotation};
use crate::physics::{Body, BodyShape, PhysicsSettings, SpawnRequest};

const DISK_RESOLUTION: u32 = 64;
const OUTLINE_COLOR: Color = Color::srgb(0.15, 0.15, 0.15);

pub fn load_texture_library(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    config: Res<SandboxConfig>,
) {
    info!("Requesting body textures...");
    let textures = &config.textures;
    let library = TextureLibrary {
        boxes: textures
            .boxes
            .iter()
            .map(|path| asset_server.load(path.clone()))
            .collect(),
        balls: textures
            .balls
            .iter()
            .map(|path| asset_server.load(path.clone()))
            .collect(),
        background: textures
            .background
            .as_ref()
            .map(|path| asset_server.load(path.clone())),
        disk: images.add(disk_image(DISK_RESOLUTION)),
    };
    info!(
        "{} box and {} ball textures configured",
        library.boxes.len(),
        library.balls.len()
    );

    if let Some(background) = &library.background {
        commands.spawn((
            BackgroundSprite,
            Sprite {
                image: background.clone(),
                custom_size: Some(config.window.size()),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, -10.0),
        ));
    }

    commands.insert_resource(library);
}

pub fn apply_texture_events(
    mut events: EventReader<GraphicsEvent>,
    mut settings: ResMut<TextureSettings>,
) {
    for event in events.read() {
        match event.toggle {
            GraphicsToggle::ImageRender => settings.image_render = event.value,
            GraphicsToggle::RandomTextures => settings.random_textures = event.value,
            _ => {}
        }
    }
}

pub fn attach_sprites(
    mut commands: Commands,
    library: Res<TextureLibrary>,
    settings: Res<TextureSettings>,
    physics: Res<PhysicsSettings>,
    mut rng_param: GlobalEntropy<WyRand>,
    requests: Query<(Entity, &SpawnRequest), Added<SpawnRequest>>,
) {
    let rng: &mut Entropy<WyRand> = &mut *rng_param;

    for (entity, request) in requests.iter() {
        let available = library.for_shape(request.shape).len();
        let texture = BodyTexture(choose_texture(available, settings.random_textures, rng));

        let mut sprite = Sprite {
            custom_size: Some(Vec2::splat(physics.body_size * 2.0)),
            ..default()
        };
        apply_texture(&mut sprite, &library, request.shape, texture);

        commands.entity(entity).insert((
            sprite,
            texture,
            visibility_for(settings.image_render),
        ));
    }
}

/// Läuft nur, wenn sich `TextureSettings` geändert hat.
pub fn retexture_bodies(
    library: Res<TextureLibrary>,
    settings: Res<TextureSettings>,
    mut last_random: Local<Option<bool>>,
    mut rng_param: GlobalEntropy<WyRand>,
    mut bodies: Query<(&SpawnRequest, &mut Sprite, &mut BodyTexture, &mut Visibility)>,
    mut background: Query<&mut Visibility, (With<BackgroundSprite>, Without<SpawnRequest>)>,
) {
    let rng: &mut Entropy<WyRand> = &mut *rng_param;
    let pick_again = last_random.is_some_and(|last| last != settings.random_textures);
    *last_random = Some(settings.random_textures);

    for (request, mut sprite, mut texture, mut visibility) in bodies.iter_mut() {
        if pick_again {
            let available = library.for_shape(request.shape).len();
            *texture = BodyTexture(choose_texture(available, settings.random_textures, rng));
            apply_texture(&mut sprite, &library, request.shape, *texture);
        }
        *visibility = visibility_for(settings.image_render);
    }

    for mut visibility in background.iter_mut() {
        *visibility = visibility_for(settings.image_render);
    }
}

/// Ohne Bilddarstellung werden die Körper als Umrisse gezeichnet.
pub fn draw_body_outlines(
    mut gizmos: Gizmos,
    settings: Res<TextureSettings>,
    bodies: Query<(&Transform, &Body)>,
) {
    if settings.image_render {
        return;
    }

    for (transform, body) in bodies.iter() {
        let position = transform.translation.truncate();
        match body.shape {
            BodyShape::Circle => {
                gizmos.circle_2d(
                    Isometry2d::from_translation(position),
                    body.half_extent,
                    OUTLINE_COLOR,
                );
            }
            BodyShape::Box => {
                let [a, b, c, d] = box_corners(body.half_extent, position, z_rotation(transform));
                gizmos.linestrip_2d([a, b, c, d, a], OUTLINE_COLOR);
            }
        }
    }
}

fn apply_texture(
    sprite: &mut Sprite,
    library: &TextureLibrary,
    shape: BodyShape,
    texture: BodyTexture,
) {
    match texture.0.and_then(|index| library.for_shape(shape).get(index)) {
        Some(image) => {
            sprite.image = image.clone();
            sprite.color = Color::WHITE;
        }
        None => {
            sprite.image = library.fallback(shape);
            sprite.color = fallback_tint(shape);
        }
    }
}

fn visibility_for(image_render: bool) -> Visibility {
    if image_render {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}
