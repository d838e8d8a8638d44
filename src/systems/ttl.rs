//! TTL (Time-to-live) system.
//!
//! Projectiles carry a [`Ttl`](crate::components::ttl::Ttl) set from the
//! weapon's projectile lifetime. [`ttl_system`] counts it down with the
//! scaled frame delta and despawns the entity once it runs out, so shots
//! that leave the screen without hitting anything are discarded.

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Decrements TTL and despawns entities when it reaches zero.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}
