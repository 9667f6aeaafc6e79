// src/initialization/debug/plugin.rs
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

/// Welt-Inspektor für die Entwicklung (Feature `inspector`).
pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        // EguiPlugin wird bereits vom GuiPlugin registriert
        app.add_plugins(WorldInspectorPlugin::new());
        info!("World inspector enabled.");
    }
}
