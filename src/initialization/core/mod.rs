// src/initialization/core/mod.rs
pub mod plugin;
pub mod systems;
