// src/gui/panel.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use strum::IntoEnumIterator;

use super::types::{ControlPanelState, PanelTab, GRAVITY_RANGE};
use crate::events::{
    ClearBodiesEvent, GraphicsEvent, GraphicsToggle, LightReloadEvent, LightSwitch,
    LightSwitchEvent,
};

/// Zeichnet das Kontrollfenster und meldet Klicks auf Knöpfe und Checkboxen.
///
/// Regleränderungen werden erst in `emit_slider_changes` erkannt.
pub fn control_panel_system(
    mut contexts: EguiContexts,
    mut state: ResMut<ControlPanelState>,
    mut graphics: EventWriter<GraphicsEvent>,
    mut switches: EventWriter<LightSwitchEvent>,
    mut reloads: EventWriter<LightReloadEvent>,
    mut clears: EventWriter<ClearBodiesEvent>,
) {
    let ctx = contexts.ctx_mut();
    let state = &mut *state;

    egui::Window::new("Control Window")
        .default_pos([200.0, 200.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in PanelTab::iter() {
                    ui.selectable_value(&mut state.tab, tab, tab.to_string());
                }
            });
            ui.separator();

            match state.tab {
                PanelTab::Physics => physics_tab(ui, state),
                PanelTab::Lighting => {
                    if lighting_tab(ui, state, &mut switches) {
                        reloads.send(LightReloadEvent);
                    }
                }
            }

            ui.add_space(8.0);
            if ui.button("Clear Bodies").clicked() {
                clears.send(ClearBodiesEvent);
            }
            ui.add_space(8.0);

            ui.group(|ui| {
                ui.label("Graphics");
                egui::Grid::new("graphics_toggles")
                    .num_columns(2)
                    .show(ui, |ui| {
                        for (index, toggle) in GraphicsToggle::iter().enumerate() {
                            let value = state.graphics.entry(toggle).or_insert(false);
                            if ui.checkbox(value, toggle.to_string()).changed() {
                                graphics.send(GraphicsEvent {
                                    toggle,
                                    value: *value,
                                });
                            }
                            if index % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
            });
        });

}

fn physics_tab(ui: &mut egui::Ui, state: &mut ControlPanelState) {
    egui::Grid::new("gravity").num_columns(2).show(ui, |ui| {
        ui.label("Gravity X");
        ui.add(egui::Slider::new(&mut state.gravity.x, GRAVITY_RANGE).step_by(1.0));
        ui.end_row();

        ui.label("Gravity Y");
        ui.add(egui::Slider::new(&mut state.gravity.y, GRAVITY_RANGE).step_by(1.0));
        ui.end_row();
    });

    // Setzt nur die Regler zurück, das Event folgt aus der Änderungserkennung
    if ui.button("Zero Gravity").clicked() {
        state.zero_gravity();
    }
}

/// Gibt `true` zurück, wenn "Reload Light" gedrückt wurde.
fn lighting_tab(
    ui: &mut egui::Ui,
    state: &mut ControlPanelState,
    switches: &mut EventWriter<LightSwitchEvent>,
) -> bool {
    ui.group(|ui| {
        ui.label("Light Color");
        ui.horizontal(|ui| {
            for (channel, name) in ["R", "G", "B"].into_iter().enumerate() {
                ui.vertical(|ui| {
                    ui.label(name);
                    ui.add(egui::Slider::new(&mut state.light_color[channel], 0..=255));
                });
            }
        });
    });

    ui.horizontal(|ui| {
        for switch in LightSwitch::iter() {
            let value = state.light_switches.entry(switch).or_insert(true);
            if ui.checkbox(value, switch.to_string()).changed() {
                switches.send(LightSwitchEvent {
                    switch,
                    value: *value,
                });
            }
        }
    });

    ui.button("Reload Light").clicked()
}
