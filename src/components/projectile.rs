use bevy_ecs::prelude::Component;
use glam::Vec2;

/// A fired projectile.
///
/// Moved by [`projectile_movement_system`](crate::systems::movement::projectile_movement_system).
/// Collision belongs to the host game, which reads `damage` on impact.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub velocity: Vec2,
    pub damage: i32,
    /// Size multiplier from the laser-size boost.
    pub scale: f32,
}
