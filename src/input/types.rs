// src/input/types.rs
use bevy::prelude::*;

use crate::physics::BodyShape;

/// Mausposition in Weltkoordinaten, `None` wenn der Cursor außerhalb des Fensters ist.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorWorldPosition(pub Option<Vec2>);

/// Gesetzt, solange sich der Mauszeiger über dem Kontrollfenster befindet.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerCapture(pub bool);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Spawn(BodyShape),
    Remove,
}

/// Links: Box, rechts: Kreis, Mitte: nächstgelegenen Körper entfernen.
pub fn click_action(button: MouseButton) -> Option<ClickAction> {
    match button {
        MouseButton::Left => Some(ClickAction::Spawn(BodyShape::Box)),
        MouseButton::Right => Some(ClickAction::Spawn(BodyShape::Circle)),
        MouseButton::Middle => Some(ClickAction::Remove),
        _ => None,
    }
}
