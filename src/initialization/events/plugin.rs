// src/initialization/events/plugin.rs
use bevy::prelude::*;

use super::systems::{log_body_events, log_gui_events};
use crate::events::{
    ClearBodiesEvent, EntityRemoveEvent, GraphicsEvent, GravityChangeEvent, LightColorEvent,
    LightReloadEvent, LightSwitchEvent,
};

/// Plugin zum Registrieren aller Events der Sandbox.
pub struct EventPlugin;

impl Plugin for EventPlugin {
    fn build(&self, app: &mut App) {
        app // Register events
            .add_event::<GravityChangeEvent>()
            .add_event::<LightReloadEvent>()
            .add_event::<LightColorEvent>()
            .add_event::<LightSwitchEvent>()
            .add_event::<GraphicsEvent>()
            .add_event::<EntityRemoveEvent>()
            .add_event::<ClearBodiesEvent>()
            // Add systems
            .add_systems(Last, (log_gui_events, log_body_events));
    }
}
