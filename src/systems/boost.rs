use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::weaponcontroller::WeaponController;
use crate::events::boost::{BoostEvent, WeaponBoost};

/// Apply a picked-up boost to the ship's weapon.
pub fn boost_observer(trigger: On<BoostEvent>, mut weapons: Query<&mut WeaponController>) {
    let event = trigger.event();
    let Ok(mut weapon) = weapons.get_mut(event.entity) else {
        warn!("Boost for {:?} ignored: no weapon", event.entity);
        return;
    };
    match event.boost {
        WeaponBoost::FireRate {
            multiplier,
            duration,
        } => weapon.apply_fire_rate_boost(multiplier, duration),
        WeaponBoost::LaserSize {
            multiplier,
            duration,
        } => weapon.apply_laser_size_boost(multiplier, duration),
        WeaponBoost::TripleShot { duration } => weapon.apply_triple_shot(duration),
    }
    info!("Boost {:?} applied to {:?}", event.boost, event.entity);
}
