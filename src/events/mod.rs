// src/events/mod.rs
pub mod types;

pub use types::{
    ClearBodiesEvent, EntityRemoveEvent, GraphicsEvent, GraphicsToggle, GravityChangeEvent,
    LightColorEvent, LightReloadEvent, LightSwitch, LightSwitchEvent,
};
