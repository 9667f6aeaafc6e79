// src/initialization/debug/mod.rs
#[cfg(feature = "inspector")]
pub mod plugin;
