//! Weapon system.
//!
//! Drives every [`WeaponController`] once per frame. Ships marked
//! [`InputControlled`] fire while the fire button is held or the player is
//! moving; other ships only cool down and run out their boosts. Fired
//! projectiles leave as [`ProjectileSpawn`] messages, picked up by
//! [`projectile_spawn_system`](crate::systems::projectile::projectile_spawn_system).

use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::weaponcontroller::{HeatGauge, WeaponController};
use crate::events::projectile::ProjectileSpawn;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn weapon_system(
    time: Res<WorldTime>,
    input: Res<InputState>,
    mut query: Query<(
        &mut WeaponController,
        &MapPosition,
        Has<InputControlled>,
        Option<&mut HeatGauge>,
    )>,
    mut writer: MessageWriter<ProjectileSpawn>,
) {
    let fire = input.fire_requested();
    let moving = input.move_requested();
    for (mut weapon, position, controlled, gauge) in query.iter_mut() {
        let volley = weapon.update(
            time.delta,
            controlled && fire,
            controlled && moving,
            position.pos,
        );
        writer.write_batch(volley);
        if let Some(mut gauge) = gauge {
            gauge.level = weapon.heat_indicator();
        }
    }
}
