// src/lighting/plugin.rs
use bevy::prelude::*;

use super::systems::{
    apply_light_events, reload_lighting, render_light_mask, resize_light_mask,
    setup_light_overlay, update_overlay_visibility,
};
use super::types::LightingSettings;
use crate::SandboxSet;

/// Dynamisches Licht: Mauslicht, feste Lichter und die Abdunklungsmaske.
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(LightEventsPlugin)
            .add_systems(Startup, setup_light_overlay)
            .add_systems(
                Update,
                (
                    resize_light_mask,
                    update_overlay_visibility.run_if(resource_changed::<LightingSettings>),
                    render_light_mask,
                )
                    .chain()
                    .after(reload_lighting)
                    .in_set(SandboxSet::Lighting),
            );
    }
}

/// Auswertung der Licht-Events ohne Renderer.
pub struct LightEventsPlugin;

impl Plugin for LightEventsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LightingSettings>().add_systems(
            Update,
            (apply_light_events, reload_lighting)
                .chain()
                .in_set(SandboxSet::Lighting),
        );
    }
}
