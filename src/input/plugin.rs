// src/input/plugin.rs
use bevy::prelude::*;

use super::systems::{handle_clicks, track_cursor};
use super::types::{CursorWorldPosition, PointerCapture};
use crate::SandboxSet;

/// Mausklicks im Fenster: Körper erzeugen oder entfernen.
pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorWorldPosition>()
            .init_resource::<PointerCapture>()
            .add_systems(
                Update,
                (track_cursor, handle_clicks)
                    .chain()
                    .in_set(SandboxSet::Input),
            );
    }
}
