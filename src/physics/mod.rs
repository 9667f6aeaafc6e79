// src/physics/mod.rs
pub mod debug_draw;
pub mod math;
pub mod plugin;
pub mod systems;
pub mod types;

pub use plugin::{BodyPlugin, PhysicsPlugin};
pub use types::{Body, BodyShape, DebugDrawSettings, PhysicsSettings, SpawnRequest, WindowWall};
