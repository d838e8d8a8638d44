//! Input-controlled marker.
//!
//! Entities with [`InputControlled`] read the shared
//! [`InputState`](crate::resources::input::InputState) to decide whether
//! their weapon fires.

use bevy_ecs::prelude::Component;

/// The player's ship: its weapon follows the fire button and movement input.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct InputControlled;
