// src/initialization/events/mod.rs
pub mod plugin;
pub mod systems;
