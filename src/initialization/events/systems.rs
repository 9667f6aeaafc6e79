// src/initialization/events/systems.rs
use bevy::prelude::*;

use crate::events::{
    ClearBodiesEvent, EntityRemoveEvent, GraphicsEvent, GravityChangeEvent, LightColorEvent,
    LightReloadEvent, LightSwitchEvent,
};

// Ausgabe der Events aus dem Kontrollfenster
pub fn log_gui_events(
    mut gravity: EventReader<GravityChangeEvent>,
    mut colors: EventReader<LightColorEvent>,
    mut switches: EventReader<LightSwitchEvent>,
    mut reloads: EventReader<LightReloadEvent>,
    mut graphics: EventReader<GraphicsEvent>,
) {
    for event in gravity.read() {
        debug!("Gravity changed to ({}, {})", event.x, event.y);
    }
    for event in colors.read() {
        debug!("Light color changed to {:?}", event.color);
    }
    for event in switches.read() {
        info!("Light switch '{}' set to {}", event.switch, event.value);
    }
    for _ in reloads.read() {
        info!("Light reload requested");
    }
    for event in graphics.read() {
        info!("Graphics option '{}' set to {}", event.toggle, event.value);
    }
}

pub fn log_body_events(
    mut removals: EventReader<EntityRemoveEvent>,
    mut clears: EventReader<ClearBodiesEvent>,
) {
    for event in removals.read() {
        debug!("Removal requested near ({:.1}, {:.1})", event.x, event.y);
    }
    for _ in clears.read() {
        info!("Clearing all bodies");
    }
}
