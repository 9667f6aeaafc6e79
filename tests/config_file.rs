//! The configuration shipped next to the binary must stay loadable.

use physics_sandbox::config::SandboxConfig;

#[test]
fn shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.ron");
    let config = SandboxConfig::load(path).expect("config.ron should parse");

    assert_eq!((config.window.width, config.window.height), (800, 600));
    assert_eq!(config.textures.boxes.len(), 2);
    assert_eq!(config.textures.balls.len(), 3);
    assert_eq!(config.lighting.lights.len(), 1);
}

#[test]
fn shipped_textures_exist() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.ron");
    let config = SandboxConfig::load(path).unwrap();
    let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");

    let textures = &config.textures;
    for texture in textures
        .boxes
        .iter()
        .chain(&textures.balls)
        .chain(&textures.background)
    {
        assert!(assets.join(texture).exists(), "missing texture {texture}");
    }
}
