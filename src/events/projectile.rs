//! Projectile spawn requests.
//!
//! The weapon never creates projectile entities itself. Each shot is written
//! as a [`ProjectileSpawn`] message, and
//! [`crate::systems::projectile::projectile_spawn_system`] turns the messages
//! into entities. Swap that system out to hand projectiles to a different
//! factory.

use bevy_ecs::message::Message;
use glam::Vec2;
use smallvec::SmallVec;

/// Request to spawn one projectile.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpawn {
    /// World position the projectile starts at.
    pub origin: Vec2,
    /// Velocity in world units per second.
    pub velocity: Vec2,
    /// Damage dealt on impact.
    pub damage: i32,
    /// Seconds before the projectile is discarded.
    pub lifetime: f32,
    /// Uniform size multiplier (laser-size boost).
    pub scale: f32,
}

/// Projectiles produced by a single shot: one, or three with triple shot.
pub type Volley = SmallVec<[ProjectileSpawn; 3]>;
