// src/config/mod.rs
pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_or_default, ConfigSource, DEFAULT_CONFIG_PATH};
pub use types::{
    LightingConfig, PhysicsConfig, SandboxConfig, StaticLightConfig, TextureConfig, WindowConfig,
};
