// src/gui/systems.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use strum::IntoEnumIterator;

use super::types::{take_change, ControlPanelState};
use crate::events::{
    GraphicsEvent, GraphicsToggle, GravityChangeEvent, LightColorEvent, LightSwitch,
    LightSwitchEvent,
};
use crate::input::PointerCapture;

/// Meldet den Anfangszustand aller Checkboxen einmalig beim Start.
pub fn emit_initial_toggles(
    state: Res<ControlPanelState>,
    mut graphics: EventWriter<GraphicsEvent>,
    mut switches: EventWriter<LightSwitchEvent>,
) {
    for toggle in GraphicsToggle::iter() {
        graphics.send(GraphicsEvent {
            toggle,
            value: state.graphics(toggle),
        });
    }
    for switch in LightSwitch::iter() {
        switches.send(LightSwitchEvent {
            switch,
            value: state.light_switch(switch),
        });
    }
}

/// Vergleicht die Regler mit den zuletzt gemeldeten Werten.
pub fn emit_slider_changes(
    mut state: ResMut<ControlPanelState>,
    mut gravity: EventWriter<GravityChangeEvent>,
    mut colors: EventWriter<LightColorEvent>,
) {
    let state = &mut *state;

    if let Some(new_gravity) = take_change(&mut state.stored_gravity, state.gravity) {
        gravity.send(GravityChangeEvent::new(new_gravity.x, new_gravity.y));
    }
    if let Some(color) = take_change(&mut state.stored_color, state.light_color) {
        colors.send(LightColorEvent { color });
    }
}

/// Läuft vor `handle_clicks`, damit ein Klick auf das Kontrollfenster
/// im selben Frame keinen Körper erzeugt.
pub fn update_pointer_capture(
    mut contexts: EguiContexts,
    mut capture: ResMut<PointerCapture>,
) {
    capture.0 = pointer_captured(contexts.ctx_mut());
}

pub fn pointer_captured(ctx: &egui::Context) -> bool {
    ctx.is_pointer_over_area() || ctx.wants_pointer_input()
}
