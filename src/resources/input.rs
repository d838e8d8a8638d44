//! Per-frame input snapshot resource.
//!
//! The host game samples its keyboard/touch/gamepad devices once per frame
//! and writes the result into [`InputState`]. The weapon only needs two
//! things from it: whether the fire button is held, and whether the player
//! is moving.
use bevy_ecs::prelude::*;
use glam::Vec2;

/// Resource capturing the per-frame input relevant to the player ship.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    /// Whether the fire button is held this frame.
    pub fire: bool,
    /// Movement delta requested this frame (axis or touch drag).
    pub movement: Vec2,
}

impl InputState {
    pub fn fire_requested(&self) -> bool {
        self.fire
    }

    pub fn move_requested(&self) -> bool {
        self.movement != Vec2::ZERO
    }

    /// Overwrite the snapshot for the coming frame.
    pub fn sample(&mut self, fire: bool, movement: Vec2) {
        self.fire = fire;
        self.movement = movement;
    }
}
