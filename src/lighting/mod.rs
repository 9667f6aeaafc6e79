// src/lighting/mod.rs
pub mod mask;
pub mod plugin;
pub mod systems;
pub mod types;

pub use mask::{LightSource, MaskParams};
pub use plugin::{LightEventsPlugin, LightingPlugin};
pub use types::{LightMask, LightOverlay, LightingSettings};
