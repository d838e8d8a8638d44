//! Projectile spawning.
//!
//! - [`projectile_spawn_system`] turns [`ProjectileSpawn`] messages into
//!   projectile entities with a [`Ttl`] equal to the projectile lifetime.
//! - [`update_projectile_spawn_messages`] advances the message queue; run it
//!   last in the frame.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::mapposition::MapPosition;
use crate::components::projectile::Projectile;
use crate::components::ttl::Ttl;
use crate::events::projectile::ProjectileSpawn;
use crate::resources::worldsignals::WorldSignals;

/// Signal counting every projectile spawned so far.
pub const PROJECTILES_SPAWNED: &str = "projectiles_spawned";

pub fn projectile_spawn_system(
    mut reader: MessageReader<ProjectileSpawn>,
    mut signals: ResMut<WorldSignals>,
    mut commands: Commands,
) {
    for spawn in reader.read() {
        let entity = commands
            .spawn((
                MapPosition {
                    pos: spawn.origin,
                },
                Projectile {
                    velocity: spawn.velocity,
                    damage: spawn.damage,
                    scale: spawn.scale,
                },
                Ttl::new(spawn.lifetime),
            ))
            .id();
        trace!("Spawned projectile {:?} at {:?}", entity, spawn.origin);
        signals.increment(PROJECTILES_SPAWNED, 1);
    }
}

/// Advance the ECS message queue for [`ProjectileSpawn`].
pub fn update_projectile_spawn_messages(mut msgs: ResMut<Messages<ProjectileSpawn>>) {
    msgs.update();
}
