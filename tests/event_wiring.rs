//! Headless tests for the event wiring between input, control window,
//! physics, textures and lighting. Only `MinimalPlugins` are used, so no
//! window, renderer or physics stepping is involved.

use std::fs;
use std::path::PathBuf;

use bevy::prelude::*;
use bevy_rand::prelude::{EntropyPlugin, WyRand};
use bevy_rapier2d::prelude::RapierConfiguration;

use physics_sandbox::config::{ConfigSource, SandboxConfig};
use physics_sandbox::events::{
    ClearBodiesEvent, EntityRemoveEvent, GraphicsEvent, GraphicsToggle, GravityChangeEvent,
    LightColorEvent, LightReloadEvent, LightSwitch, LightSwitchEvent,
};
use physics_sandbox::gui::{ControlPanelState, PanelEventsPlugin};
use physics_sandbox::initialization::EventPlugin;
use physics_sandbox::input::systems::handle_clicks;
use physics_sandbox::input::{CursorWorldPosition, PointerCapture, PointerInputPlugin};
use physics_sandbox::lighting::mask::mask_size;
use physics_sandbox::lighting::{
    LightEventsPlugin, LightMask, LightOverlay, LightingPlugin, LightingSettings,
};
use physics_sandbox::physics::{
    Body, BodyPlugin, BodyShape, DebugDrawSettings, PhysicsSettings, SpawnRequest, WindowWall,
};
use physics_sandbox::textures::{
    fallback_tint, BackgroundSprite, BodySpritePlugin, BodyTexture, TextureEventsPlugin,
    TextureLibrary, TextureSettings,
};
use physics_sandbox::{SandboxCorePlugin, SandboxSet};

/// Alles außer den Licht-Plugins, die es mit und ohne Maske gibt.
fn base_app(source: ConfigSource) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(SandboxCorePlugin {
            config: SandboxConfig::default(),
            source,
        })
        .init_resource::<ButtonInput<MouseButton>>()
        .add_plugins((
            EventPlugin,
            PointerInputPlugin,
            BodyPlugin,
            TextureEventsPlugin,
            PanelEventsPlugin,
        ));
    app
}

fn headless_app() -> App {
    let mut app = base_app(ConfigSource::default());
    app.add_plugins(LightEventsPlugin);
    app
}

/// Mit Lichtmaske; `Assets<Image>` ersetzt das fehlende AssetPlugin.
fn lit_app(source: ConfigSource) -> App {
    let mut app = base_app(source);
    app.insert_resource(Assets::<Image>::default())
        .add_plugins(LightingPlugin);
    app
}

fn textured_app(library: TextureLibrary) -> App {
    let mut app = headless_app();
    app.add_plugins(EntropyPlugin::<WyRand>::with_seed(7u64.to_le_bytes()))
        .insert_resource(library)
        .add_plugins(BodySpritePlugin);
    app
}

fn image(id: u128) -> Handle<Image> {
    Handle::weak_from_u128(id)
}

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("physics_sandbox_{name}_{nanos}.ron"));
    fs::write(&path, contents).unwrap();
    path
}

fn click(app: &mut App, button: MouseButton, at: Vec2) {
    app.world_mut().resource_mut::<CursorWorldPosition>().0 = Some(at);
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(button);
    app.update();
    // Ohne InputPlugin bleibt just_pressed sonst bestehen
    let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
    buttons.release(button);
    buttons.clear();
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    query.iter(app.world()).count()
}

fn bodies(app: &mut App) -> Vec<(Body, Vec2)> {
    let mut query = app.world_mut().query::<(&Body, &Transform)>();
    query
        .iter(app.world())
        .map(|(body, transform)| (*body, transform.translation.truncate()))
        .collect()
}

#[test]
fn left_and_right_clicks_spawn_boxes_and_circles() {
    let mut app = headless_app();
    app.update();

    click(&mut app, MouseButton::Left, Vec2::new(10.0, 20.0));
    click(&mut app, MouseButton::Right, Vec2::new(-50.0, 0.0));

    let mut spawned = bodies(&mut app);
    spawned.sort_by(|a, b| a.1.x.total_cmp(&b.1.x));
    assert_eq!(spawned.len(), 2);
    assert_eq!(spawned[0].0.shape, BodyShape::Circle);
    assert_eq!(spawned[0].1, Vec2::new(-50.0, 0.0));
    assert_eq!(spawned[1].0.shape, BodyShape::Box);
    assert_eq!(spawned[1].1, Vec2::new(10.0, 20.0));
    assert_eq!(spawned[1].0.half_extent, 16.0);
}

#[test]
fn clicks_over_the_control_window_are_ignored() {
    let mut app = headless_app();
    app.update();

    app.world_mut().resource_mut::<PointerCapture>().0 = true;
    click(&mut app, MouseButton::Left, Vec2::ZERO);
    assert_eq!(count::<With<SpawnRequest>>(&mut app), 0);

    app.world_mut().resource_mut::<PointerCapture>().0 = false;
    click(&mut app, MouseButton::Left, Vec2::ZERO);
    assert_eq!(count::<With<SpawnRequest>>(&mut app), 1);
}

#[test]
fn capture_set_earlier_in_the_frame_blocks_the_click() {
    let mut app = headless_app();
    app.add_systems(
        Update,
        (|mut capture: ResMut<PointerCapture>| capture.0 = true)
            .in_set(SandboxSet::Input)
            .before(handle_clicks),
    );
    app.update();

    click(&mut app, MouseButton::Left, Vec2::ZERO);
    assert_eq!(count::<With<SpawnRequest>>(&mut app), 0);
}

#[test]
fn middle_click_removes_only_the_nearest_body_in_range() {
    let mut app = headless_app();
    app.update();

    click(&mut app, MouseButton::Left, Vec2::new(0.0, 0.0));
    click(&mut app, MouseButton::Left, Vec2::new(100.0, 0.0));
    assert_eq!(count::<With<Body>>(&mut app), 2);

    // Zu weit entfernt (Schwelle ist 2 * 16 Pixel)
    click(&mut app, MouseButton::Middle, Vec2::new(50.0, 0.0));
    assert_eq!(count::<With<Body>>(&mut app), 2);

    click(&mut app, MouseButton::Middle, Vec2::new(90.0, 5.0));
    let remaining = bodies(&mut app);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].1, Vec2::ZERO);
}

#[test]
fn removal_without_bodies_is_harmless() {
    let mut app = headless_app();
    app.update();

    app.world_mut().send_event(EntityRemoveEvent { x: 1.0, y: 2.0 });
    app.update();
    assert_eq!(count::<With<Body>>(&mut app), 0);
}

#[test]
fn two_removals_in_one_frame_take_two_bodies() {
    let mut app = headless_app();
    app.update();

    click(&mut app, MouseButton::Left, Vec2::new(0.0, 0.0));
    click(&mut app, MouseButton::Left, Vec2::new(10.0, 0.0));

    app.world_mut().send_event(EntityRemoveEvent { x: 0.0, y: 0.0 });
    app.world_mut().send_event(EntityRemoveEvent { x: 0.0, y: 0.0 });
    app.update();
    assert_eq!(count::<With<Body>>(&mut app), 0);
}

#[test]
fn clear_bodies_despawns_everything_spawned() {
    let mut app = headless_app();
    app.update();

    for x in [0.0, 40.0, 80.0] {
        click(&mut app, MouseButton::Left, Vec2::new(x, 0.0));
    }
    click(&mut app, MouseButton::Right, Vec2::new(0.0, 100.0));
    assert_eq!(count::<With<SpawnRequest>>(&mut app), 4);

    app.world_mut().send_event(ClearBodiesEvent);
    app.update();
    assert_eq!(count::<With<SpawnRequest>>(&mut app), 0);
}

#[test]
fn gravity_sliders_emit_once_per_change_and_reach_rapier() {
    let mut app = headless_app();
    let context = app.world_mut().spawn(RapierConfiguration::new(32.0)).id();

    // Erster Frame meldet den Startwert der Regler
    app.update();
    let emitted: Vec<GravityChangeEvent> = app
        .world()
        .resource::<Events<GravityChangeEvent>>()
        .iter_current_update_events()
        .copied()
        .collect();
    assert_eq!(emitted, vec![GravityChangeEvent::new(0.0, 10.0)]);

    app.update();
    assert!(app
        .world()
        .resource::<Events<GravityChangeEvent>>()
        .iter_current_update_events()
        .next()
        .is_none());
    assert_eq!(
        app.world().resource::<PhysicsSettings>().gravity,
        Vec2::new(0.0, -320.0)
    );

    app.world_mut().resource_mut::<ControlPanelState>().gravity = Vec2::new(5.0, 0.0);
    app.update();
    app.update();

    assert_eq!(
        app.world().resource::<PhysicsSettings>().gravity,
        Vec2::new(160.0, 0.0)
    );
    let config = app.world().get::<RapierConfiguration>(context).unwrap();
    assert_eq!(config.gravity, Vec2::new(160.0, 0.0));
}

#[test]
fn zero_gravity_button_results_in_zero_gravity() {
    let mut app = headless_app();
    app.update();
    app.update();

    app.world_mut()
        .resource_mut::<ControlPanelState>()
        .zero_gravity();
    app.update();
    app.update();

    assert_eq!(app.world().resource::<PhysicsSettings>().gravity, Vec2::ZERO);
}

#[test]
fn initial_checkbox_states_reach_every_subsystem() {
    let mut app = headless_app();
    app.update();

    assert!(app.world().resource::<PhysicsSettings>().window_collision);
    assert_eq!(count::<With<WindowWall>>(&mut app), 4);
    assert_eq!(
        *app.world().resource::<DebugDrawSettings>(),
        DebugDrawSettings::default()
    );
    assert_eq!(
        *app.world().resource::<TextureSettings>(),
        TextureSettings {
            image_render: true,
            random_textures: true,
        }
    );
    let lighting = app.world().resource::<LightingSettings>();
    assert!(lighting.enabled);
    assert!(lighting.mouse_light);
}

#[test]
fn graphics_toggles_update_their_owners() {
    let mut app = headless_app();
    app.update();

    for (toggle, value) in [
        (GraphicsToggle::WindowCollision, false),
        (GraphicsToggle::ShowAabbs, true),
        (GraphicsToggle::ShowPositions, true),
        (GraphicsToggle::ImageRender, false),
        (GraphicsToggle::RandomTextures, false),
    ] {
        app.world_mut().send_event(GraphicsEvent { toggle, value });
    }
    app.update();

    assert!(!app.world().resource::<PhysicsSettings>().window_collision);
    assert_eq!(count::<With<WindowWall>>(&mut app), 0);
    assert_eq!(
        *app.world().resource::<DebugDrawSettings>(),
        DebugDrawSettings {
            show_aabbs: true,
            show_positions: true,
        }
    );
    assert_eq!(
        *app.world().resource::<TextureSettings>(),
        TextureSettings {
            image_render: false,
            random_textures: false,
        }
    );
}

#[test]
fn light_events_update_lighting_settings() {
    let mut app = headless_app();
    app.update();

    app.world_mut().send_event(LightColorEvent {
        color: [255, 0, 64],
    });
    app.world_mut().send_event(LightSwitchEvent {
        switch: LightSwitch::MouseLight,
        value: false,
    });
    app.update();

    let lighting = app.world().resource::<LightingSettings>();
    assert_eq!(lighting.color, [255, 0, 64]);
    assert!(!lighting.mouse_light);
    assert!(lighting.enabled);
}

#[test]
fn light_color_sliders_emit_color_events() {
    let mut app = headless_app();
    app.update();
    app.update();

    app.world_mut()
        .resource_mut::<ControlPanelState>()
        .light_color = [10, 20, 30];
    app.update();
    app.update();

    assert_eq!(app.world().resource::<LightingSettings>().color, [10, 20, 30]);
}

#[test]
fn light_reload_restores_configured_values() {
    let mut app = headless_app();
    app.update();

    app.world_mut()
        .resource_mut::<LightingSettings>()
        .config
        .radius = 5.0;
    app.world_mut().send_event(LightReloadEvent);
    app.update();

    let expected = SandboxConfig::default().lighting;
    assert_eq!(app.world().resource::<LightingSettings>().config, expected);
}

#[test]
fn spawned_bodies_get_sized_sprites_and_fallbacks() {
    let boxes = vec![image(1), image(2)];
    let disk = image(10);
    let mut app = textured_app(TextureLibrary {
        boxes: boxes.clone(),
        balls: Vec::new(),
        background: None,
        disk: disk.clone(),
    });
    app.update();

    click(&mut app, MouseButton::Left, Vec2::new(0.0, 0.0));
    click(&mut app, MouseButton::Right, Vec2::new(200.0, 0.0));

    let mut query = app
        .world_mut()
        .query::<(&Body, &Sprite, &BodyTexture, &Visibility)>();
    let sprites: Vec<_> = query
        .iter(app.world())
        .map(|(body, sprite, texture, visibility)| {
            (body.shape, sprite.clone(), *texture, *visibility)
        })
        .collect();
    assert_eq!(sprites.len(), 2);

    for (shape, sprite, texture, visibility) in sprites {
        assert_eq!(sprite.custom_size, Some(Vec2::splat(32.0)));
        assert_eq!(visibility, Visibility::Inherited);
        match shape {
            BodyShape::Box => {
                let index = texture.0.expect("boxes have textures");
                assert!(index < boxes.len());
                assert_eq!(sprite.image, boxes[index]);
                assert_eq!(sprite.color, Color::WHITE);
            }
            BodyShape::Circle => {
                assert_eq!(texture, BodyTexture(None));
                assert_eq!(sprite.image, disk);
                assert_eq!(sprite.color, fallback_tint(BodyShape::Circle));
            }
        }
    }
}

#[test]
fn image_render_off_hides_bodies_and_background() {
    let mut app = textured_app(TextureLibrary {
        boxes: vec![image(1)],
        ..default()
    });
    let background = app
        .world_mut()
        .spawn((BackgroundSprite, Visibility::Inherited))
        .id();
    app.update();

    click(&mut app, MouseButton::Left, Vec2::ZERO);
    app.world_mut().send_event(GraphicsEvent {
        toggle: GraphicsToggle::ImageRender,
        value: false,
    });
    app.update();

    let mut query = app.world_mut().query_filtered::<&Visibility, With<Body>>();
    let hidden: Vec<Visibility> = query.iter(app.world()).copied().collect();
    assert_eq!(hidden, vec![Visibility::Hidden]);
    assert_eq!(
        app.world().get::<Visibility>(background),
        Some(&Visibility::Hidden)
    );

    app.world_mut().send_event(GraphicsEvent {
        toggle: GraphicsToggle::ImageRender,
        value: true,
    });
    app.update();
    assert_eq!(
        app.world().get::<Visibility>(background),
        Some(&Visibility::Inherited)
    );
}

#[test]
fn random_textures_off_reassigns_the_first_texture() {
    let boxes = vec![image(1), image(2), image(3)];
    let mut app = textured_app(TextureLibrary {
        boxes: boxes.clone(),
        ..default()
    });
    app.update();

    for x in 0..8 {
        click(&mut app, MouseButton::Left, Vec2::new(x as f32 * 50.0, 0.0));
    }
    app.world_mut().send_event(GraphicsEvent {
        toggle: GraphicsToggle::RandomTextures,
        value: false,
    });
    app.update();

    let mut query = app.world_mut().query::<(&Sprite, &BodyTexture)>();
    let textures: Vec<_> = query
        .iter(app.world())
        .map(|(sprite, texture)| (sprite.image.clone(), *texture))
        .collect();
    assert_eq!(textures.len(), 8);
    for (handle, texture) in textures {
        assert_eq!(texture, BodyTexture(Some(0)));
        assert_eq!(handle, boxes[0]);
    }
}

#[test]
fn failed_light_reload_keeps_previous_settings() {
    let path = temp_config("broken", "(lighting: (radius: \"far\"))");
    let mut app = headless_app();
    app.insert_resource(ConfigSource {
        path: Some(path.clone()),
    });
    app.update();

    app.world_mut()
        .resource_mut::<LightingSettings>()
        .config
        .radius = 42.0;
    let before = app.world().resource::<LightingSettings>().clone();

    app.world_mut().send_event(LightReloadEvent);
    app.update();
    assert_eq!(*app.world().resource::<LightingSettings>(), before);

    // Auch eine gelöschte Datei ändert nichts
    let _ = fs::remove_file(&path);
    app.world_mut().send_event(LightReloadEvent);
    app.update();
    assert_eq!(*app.world().resource::<LightingSettings>(), before);
}

#[test]
fn light_reload_with_new_mask_scale_resizes_the_mask() {
    let path = temp_config("rescale", "(lighting: (mask_scale: 4))");
    let mut app = lit_app(ConfigSource {
        path: Some(path.clone()),
    });
    app.update();

    let window = SandboxConfig::default().window.size();
    let mask = app.world().resource::<LightMask>();
    assert_eq!((mask.size, mask.scale), (mask_size(window, 4), 4));

    fs::write(&path, "(lighting: (mask_scale: 2))").unwrap();
    app.world_mut().send_event(LightReloadEvent);
    app.update();

    let mask = app.world().resource::<LightMask>();
    let size = mask_size(window, 2);
    assert_eq!((mask.size, mask.scale), (size, 2));
    let handle = mask.image.clone();
    let pixels = app.world().resource::<Assets<Image>>().get(&handle).unwrap();
    assert_eq!(pixels.data.len(), (size.x * size.y * 4) as usize);

    let mut overlays = app
        .world_mut()
        .query_filtered::<&Sprite, With<LightOverlay>>();
    let sprite = overlays.single(app.world());
    assert_eq!(sprite.custom_size, Some((size * 2).as_vec2()));

    let _ = fs::remove_file(&path);
}
