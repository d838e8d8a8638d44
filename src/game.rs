//! World setup for the player ship.
//!
//! [`setup_world`] inserts the resources and observers the ship systems need,
//! [`spawn_player_ship`] builds a ship from a [`GameConfig`], and
//! [`build_update_schedule`] returns the per-frame system chain. A frame is
//! then:
//!
//! ```ignore
//! update_world_time(&mut world, dt);
//! schedule.run(&mut world);
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;
use serde::Serialize;

use crate::components::health::Health;
use crate::components::hitfeedback::{HitBackground, HitFeedback};
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::projectile::Projectile;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::weaponcontroller::{HeatGauge, WeaponController};
use crate::events::hit::HitEvent;
use crate::events::projectile::ProjectileSpawn;
use crate::math::Color;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::boost::boost_observer;
use crate::systems::hitfeedback::{hit_feedback_observer, hit_feedback_system};
use crate::systems::movement::projectile_movement_system;
use crate::systems::projectile::{
    PROJECTILES_SPAWNED, projectile_spawn_system, update_projectile_spawn_messages,
};
use crate::systems::ttl::ttl_system;
use crate::systems::weapon::weapon_system;

pub const PLAYER_SHIP_SPRITE: &str = "player_ship";
pub const HIT_BACKGROUND_SPRITE: &str = "hit_background";

/// Insert the ship resources and register the hit and boost observers.
pub fn setup_world(world: &mut World, config: GameConfig) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WorldSignals::default());
    world.init_resource::<Messages<ProjectileSpawn>>();
    world.insert_resource(config);

    world.spawn(Observer::new(hit_feedback_observer));
    world.spawn(Observer::new(boost_observer));
    // Ensure the observers are registered before any event is triggered.
    world.flush();
}

/// Per-frame systems, in order.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            weapon_system,
            projectile_spawn_system,
            projectile_movement_system,
            ttl_system,
            hit_feedback_system,
            update_projectile_spawn_messages,
        )
            .chain(),
    );
    update
}

/// Spawn the player ship at `position` with every component built from
/// `config`, plus its hit background when that effect is enabled.
pub fn spawn_player_ship(world: &mut World, config: &GameConfig, position: Vec2) -> Entity {
    let background = config.background.then(|| {
        world
            .spawn((
                HitBackground,
                Sprite::new(HIT_BACKGROUND_SPRITE),
                Tint::from_color(Color::WHITE.with_alpha(config.min_background_alpha)),
            ))
            .id()
    });

    let health = config.ship_health;
    let feedback = config.hit_feedback(health, background);
    let color = feedback.gradient_color(health).unwrap_or(Color::WHITE);

    let ship = world
        .spawn((
            MapPosition {
                pos: position,
            },
            Health::new(health),
            WeaponController::new(config.weapon.clone()),
            HeatGauge::default(),
            feedback,
            Sprite::new(PLAYER_SHIP_SPRITE),
            Tint::from_color(color),
            InputControlled,
        ))
        .id();
    info!("Spawned player ship {:?} with {} health", ship, health);
    ship
}

/// Apply `damage` to `ship` and trigger its hit feedback.
///
/// Returns the remaining health, or `None` if `ship` has no [`Health`].
pub fn damage_ship(world: &mut World, ship: Entity, damage: i32) -> Option<i32> {
    let remaining = world.get_mut::<Health>(ship)?.apply_damage(damage);
    world.trigger(HitEvent { entity: ship });
    Some(remaining)
}

/// Ship state at a point in time, for logs and the demo's JSON output.
#[derive(Serialize, Clone, Debug)]
pub struct ShipSnapshot {
    pub frame: u64,
    pub elapsed: f32,
    pub health: Health,
    pub heat_level: f32,
    pub sprite: String,
    pub color: Color,
    pub projectiles_spawned: i32,
    pub projectiles_alive: usize,
    pub weapon: WeaponController,
    pub feedback: HitFeedback,
}

/// Capture the state of `ship`, or `None` if it lacks a ship component.
pub fn ship_snapshot(world: &mut World, ship: Entity) -> Option<ShipSnapshot> {
    let time = *world.resource::<WorldTime>();
    let projectiles_spawned = world
        .resource::<WorldSignals>()
        .get_integer(PROJECTILES_SPAWNED)
        .unwrap_or(0);
    let projectiles_alive = world.query::<&Projectile>().iter(world).count();

    let ship = world.get_entity(ship).ok()?;
    Some(ShipSnapshot {
        frame: time.frame_count,
        elapsed: time.elapsed,
        health: *ship.get::<Health>()?,
        heat_level: ship.get::<HeatGauge>().map_or(0.0, |g| g.level),
        sprite: ship.get::<Sprite>()?.tex_key.clone(),
        color: ship.get::<Tint>()?.color,
        projectiles_spawned,
        projectiles_alive,
        weapon: ship.get::<WeaponController>()?.clone(),
        feedback: ship.get::<HitFeedback>()?.clone(),
    })
}
