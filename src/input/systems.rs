// src/input/systems.rs
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::types::{click_action, ClickAction, CursorWorldPosition, PointerCapture};
use crate::events::EntityRemoveEvent;
use crate::initialization::MainCamera;
use crate::physics::SpawnRequest;

pub fn track_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut cursor: ResMut<CursorWorldPosition>,
) {
    let (Ok(window), Ok((camera, camera_transform))) = (windows.get_single(), cameras.get_single())
    else {
        return;
    };

    cursor.0 = window
        .cursor_position()
        .and_then(|position| camera.viewport_to_world_2d(camera_transform, position).ok());
}

pub fn handle_clicks(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorWorldPosition>,
    capture: Res<PointerCapture>,
    mut removals: EventWriter<EntityRemoveEvent>,
) {
    // Klicks in das Kontrollfenster gehören egui
    if capture.0 {
        return;
    }
    let Some(position) = cursor.0 else {
        return;
    };

    for button in buttons.get_just_pressed() {
        match click_action(*button) {
            Some(ClickAction::Spawn(shape)) => {
                let entity = commands.spawn(SpawnRequest::new(position, shape)).id();
                debug!("Spawn request {:?} for {:?} at {}", entity, shape, position);
            }
            Some(ClickAction::Remove) => {
                removals.send(EntityRemoveEvent::at(position));
            }
            None => {}
        }
    }
}
