// src/textures/mod.rs
pub mod plugin;
pub mod procedural;
pub mod systems;
pub mod types;

pub use plugin::{BodySpritePlugin, TextureEventsPlugin, TexturePlugin};
pub use types::{
    choose_texture, fallback_tint, BackgroundSprite, BodyTexture, TextureLibrary, TextureSettings,
};
