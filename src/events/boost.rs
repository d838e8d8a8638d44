//! Weapon boost pickups.
//!
//! Triggering a [`BoostEvent`] applies a boost to the
//! [`WeaponController`](crate::components::weaponcontroller::WeaponController)
//! of `entity`. See [`crate::systems::boost::boost_observer`].

use bevy_ecs::prelude::*;

/// Kind and strength of a weapon boost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeaponBoost {
    /// Faster firing and proportionally larger heat capacity.
    FireRate { multiplier: f32, duration: f32 },
    /// Larger projectiles.
    LaserSize { multiplier: f32, duration: f32 },
    /// Three projectiles per shot.
    TripleShot { duration: f32 },
}

/// Event fired when a ship picks up a weapon boost.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BoostEvent {
    pub entity: Entity,
    pub boost: WeaponBoost,
}
