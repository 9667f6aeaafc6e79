// src/events/types.rs
use bevy::prelude::*;
use strum::{Display, EnumIter};

/// Der Benutzer hat die Schwerkraft im Kontrollfenster geändert.
///
/// Werte in m/s², Bildschirmkonvention: positives `y` zeigt nach unten.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GravityChangeEvent {
    pub x: f32,
    pub y: f32,
}

impl GravityChangeEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Lichteinstellungen sollen neu geladen werden (keine Daten).
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LightReloadEvent;

/// Neue Farbe des Lichts aus den RGB-Schiebereglern.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightColorEvent {
    pub color: [u8; 3],
}

/// Welche Licht-Checkbox umgeschaltet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum LightSwitch {
    #[strum(to_string = "Enable")]
    Enabled,
    #[strum(to_string = "Mouse light")]
    MouseLight,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightSwitchEvent {
    pub switch: LightSwitch,
    pub value: bool,
}

/// Checkboxen im Bereich "Graphics" des Kontrollfensters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum GraphicsToggle {
    #[strum(to_string = "Image Render")]
    ImageRender,
    #[strum(to_string = "Random Textures")]
    RandomTextures,
    #[strum(to_string = "Show AABBs")]
    ShowAabbs,
    #[strum(to_string = "Show Positions")]
    ShowPositions,
    #[strum(to_string = "Window Collision")]
    WindowCollision,
}

/// Eine Graphics-Checkbox hat ihren Zustand geändert.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsEvent {
    pub toggle: GraphicsToggle,
    /// Der neue Wert der Checkbox
    pub value: bool,
}

/// Klick außerhalb des Kontrollfensters mit der mittleren Maustaste.
///
/// Der Körper, der diesen Weltkoordinaten am nächsten liegt, soll entfernt werden.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EntityRemoveEvent {
    pub x: f32,
    pub y: f32,
}

impl EntityRemoveEvent {
    pub fn at(position: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// "Clear Bodies" wurde gedrückt.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ClearBodiesEvent;
