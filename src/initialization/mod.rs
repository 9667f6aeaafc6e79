// src/initialization/mod.rs

// Declare sub-modules
mod core;
mod debug;
mod events;

// --- Public Exports ---
pub use self::core::plugin::CorePlugin;
pub use self::core::systems::MainCamera;
#[cfg(feature = "inspector")]
pub use debug::plugin::DebugPlugin;
pub use events::plugin::EventPlugin;
