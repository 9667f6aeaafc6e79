// src/textures/plugin.rs
use bevy::prelude::*;

use super::systems::{
    apply_texture_events, attach_sprites, draw_body_outlines, load_texture_library,
    retexture_bodies,
};
use super::types::TextureSettings;
use crate::SandboxSet;

/// Texturen für Körper und Hintergrund.
pub struct TexturePlugin;

impl Plugin for TexturePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((TextureEventsPlugin, BodySpritePlugin))
            .add_systems(Startup, load_texture_library)
            .add_systems(
                Update,
                draw_body_outlines
                    .after(retexture_bodies)
                    .in_set(SandboxSet::Textures),
            );
    }
}

/// Nur die Auswertung der Graphics-Events, ohne Assets.
pub struct TextureEventsPlugin;

impl Plugin for TextureEventsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextureSettings>()
            .add_systems(Update, apply_texture_events.in_set(SandboxSet::Textures));
    }
}

/// Sprites für neue Körper und das Umschalten der Texturen.
///
/// Setzt eine `TextureLibrary` und eine globale `WyRand`-Entropiequelle voraus.
pub struct BodySpritePlugin;

impl Plugin for BodySpritePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                attach_sprites,
                retexture_bodies.run_if(resource_changed::<TextureSettings>),
            )
                .chain()
                .after(apply_texture_events)
                .in_set(SandboxSet::Textures),
        );
    }
}
