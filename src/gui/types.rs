// src/gui/types.rs
use std::collections::HashMap;

use bevy::prelude::*;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::config::SandboxConfig;
use crate::events::{GraphicsToggle, LightSwitch};

/// Seiten des Kontrollfensters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Display)]
pub enum PanelTab {
    #[default]
    Physics,
    Lighting,
}

/// Werte aller Regler und Checkboxen des Kontrollfensters.
///
/// Die `stored_*` Felder halten den zuletzt gemeldeten Wert; nur Abweichungen
/// davon erzeugen ein Event.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControlPanelState {
    pub tab: PanelTab,
    /// Schwerkraft-Regler (m/s², y nach unten), Bereich -50..=50
    pub gravity: Vec2,
    pub light_color: [u8; 3],
    pub light_switches: HashMap<LightSwitch, bool>,
    pub graphics: HashMap<GraphicsToggle, bool>,
    pub stored_gravity: Option<Vec2>,
    pub stored_color: Option<[u8; 3]>,
}

pub const GRAVITY_RANGE: std::ops::RangeInclusive<f32> = -50.0..=50.0;

impl ControlPanelState {
    pub fn from_config(config: &SandboxConfig) -> Self {
        let (x, y) = config.physics.initial_gravity;
        let graphics = GraphicsToggle::iter()
            .map(|toggle| (toggle, initially_on(toggle)))
            .collect();
        let light_switches = LightSwitch::iter().map(|switch| (switch, true)).collect();

        Self {
            tab: PanelTab::default(),
            gravity: Vec2::new(x, y).clamp(
                Vec2::splat(*GRAVITY_RANGE.start()),
                Vec2::splat(*GRAVITY_RANGE.end()),
            ),
            light_color: [255, 255, 255],
            light_switches,
            graphics,
            stored_gravity: None,
            stored_color: None,
        }
    }

    pub fn graphics(&self, toggle: GraphicsToggle) -> bool {
        self.graphics.get(&toggle).copied().unwrap_or(false)
    }

    pub fn light_switch(&self, switch: LightSwitch) -> bool {
        self.light_switches.get(&switch).copied().unwrap_or(false)
    }

    pub fn zero_gravity(&mut self) {
        self.gravity = Vec2::ZERO;
    }
}

impl FromWorld for ControlPanelState {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<SandboxConfig>() {
            Some(config) => Self::from_config(config),
            None => Self::from_config(&SandboxConfig::default()),
        }
    }
}

fn initially_on(toggle: GraphicsToggle) -> bool {
    matches!(
        toggle,
        GraphicsToggle::ImageRender
            | GraphicsToggle::RandomTextures
            | GraphicsToggle::WindowCollision
    )
}

/// Meldet `current`, falls es vom gespeicherten Wert abweicht, und speichert es.
pub fn take_change<T: PartialEq + Copy>(stored: &mut Option<T>, current: T) -> Option<T> {
    if stored.as_ref() == Some(&current) {
        return None;
    }
    *stored = Some(current);
    Some(current)
}
