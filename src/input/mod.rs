// src/input/mod.rs
pub mod plugin;
pub mod systems;
pub mod types;

pub use plugin::PointerInputPlugin;
pub use types::{click_action, ClickAction, CursorWorldPosition, PointerCapture};
