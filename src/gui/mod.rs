// src/gui/mod.rs
pub mod panel;
pub mod plugin;
pub mod systems;
pub mod types;

pub use plugin::{GuiPlugin, PanelEventsPlugin};
pub use types::{take_change, ControlPanelState, PanelTab};
