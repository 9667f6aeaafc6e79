// src/gui/plugin.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use super::panel::control_panel_system;
use super::systems::{
    emit_initial_toggles, emit_slider_changes, update_pointer_capture,
};
use super::types::ControlPanelState;
use crate::input::systems::handle_clicks;
use crate::SandboxSet;

/// Das Kontrollfenster (egui) und die daraus erzeugten Events.
pub struct GuiPlugin;

impl Plugin for GuiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin);
        }

        app.add_plugins(PanelEventsPlugin).add_systems(
            Update,
            (
                update_pointer_capture
                    .before(handle_clicks)
                    .in_set(SandboxSet::Input),
                control_panel_system
                    .before(emit_slider_changes)
                    .in_set(SandboxSet::Gui),
            ),
        );

        info!("Control window registered.");
    }
}

/// Änderungserkennung der Regler und Startzustand der Checkboxen.
pub struct PanelEventsPlugin;

impl Plugin for PanelEventsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlPanelState>()
            .add_systems(Startup, emit_initial_toggles)
            .add_systems(Update, emit_slider_changes.in_set(SandboxSet::Gui));
    }
}
