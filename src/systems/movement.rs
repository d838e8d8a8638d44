use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::projectile::Projectile;
use crate::resources::worldtime::WorldTime;

/// Move projectiles along their velocity.
pub fn projectile_movement_system(
    mut query: Query<(&mut MapPosition, &Projectile)>,
    time: Res<WorldTime>,
) {
    for (mut position, projectile) in query.iter_mut() {
        position.pos += projectile.velocity * time.delta;
    }
}
