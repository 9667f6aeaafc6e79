use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;

use physics_sandbox::config::load_or_default;
use physics_sandbox::SandboxPlugins;

fn main() -> anyhow::Result<()> {
    // Erstes Argument: Pfad zur Konfigurationsdatei
    let path = std::env::args().nth(1).map(PathBuf::from);
    let (config, source) = load_or_default(path).context("failed to load configuration")?;

    App::new()
        .add_plugins(SandboxPlugins::new(config, source))
        .run();

    Ok(())
}
