//! Heat-gated continuous-fire weapon.
//!
//! The [`WeaponController`] component owns everything the player's gun needs
//! between frames:
//!
//! - `heat` – rises by one per shot, decays continuously, and blocks firing
//!   once it reaches the heat capacity
//! - three boost slots – fire rate, laser size and triple shot, each timed
//!   independently
//! - the continuous-fire loop – a countdown to the next shot, present only
//!   while the trigger (or movement) is held
//!
//! # Frame order
//!
//! [`WeaponController::update`] runs the steps of one frame in a fixed order,
//! each step seeing the results of the previous one:
//!
//! 1. boost countdowns
//! 2. fire/stop decision and the shot (if one is due)
//! 3. heat decay
//!
//! The heat indicator is read afterwards with [`WeaponController::heat_indicator`].
//!
//! # Overheat
//!
//! The shot that brings heat to capacity does not clamp it there: heat jumps
//! to the cooldown target, which is usually *above* capacity, so the weapon
//! has to cool down for a while before it fires again.
//!
//! # Related
//!
//! - [`crate::systems::weapon::weapon_system`] – drives the controller each frame
//! - [`crate::events::projectile::ProjectileSpawn`] – what a shot produces

use bevy_ecs::prelude::Component;
use glam::Vec2;
use log::{debug, info};
use serde::Serialize;

use crate::components::boost::Boost;
use crate::events::projectile::{ProjectileSpawn, Volley};

/// The laser-size boost expires once one second is left rather than at zero.
///
/// Long-standing behavior of the weapon: a laser-size pickup lasts one second
/// less than its nominal duration, and pickups of one second or less have no
/// effect at all.
pub const LASER_SIZE_EXPIRY_THRESHOLD: f32 = 1.0;

/// Spawn offsets of a triple shot relative to the ship: left, center, right.
pub const TRIPLE_SHOT_OFFSETS: [Vec2; 3] = [
    Vec2::new(-0.3, -0.2),
    Vec2::new(0.0, 0.0),
    Vec2::new(0.3, -0.2),
];

const SINGLE_SHOT_OFFSETS: [Vec2; 1] = [Vec2::ZERO];

/// Vertical direction projectiles travel in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FireDirection {
    Up,
    Down,
}

impl FireDirection {
    pub fn sign(self) -> f32 {
        match self {
            FireDirection::Up => 1.0,
            FireDirection::Down => -1.0,
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(FireDirection::Up),
            "down" => Ok(FireDirection::Down),
            other => Err(format!("Invalid fire direction '{}'", other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FireDirection::Up => "up",
            FireDirection::Down => "down",
        }
    }
}

/// Static weapon parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeaponParams {
    /// Seconds between shots without a fire-rate boost.
    pub firing_delay: f32,
    /// Heat at which firing is refused, before fire-rate scaling.
    pub heat_capacity: f32,
    /// Heat value set on overheat, before fire-rate scaling.
    pub heat_cooldown_target: f32,
    /// Heat lost per second.
    pub heat_reduce_factor: f32,
    /// Projectile speed in world units per second.
    pub projectile_speed: f32,
    /// Damage carried by each projectile.
    pub projectile_damage: i32,
    /// Seconds before a projectile is discarded.
    pub projectile_lifetime: f32,
    pub direction: FireDirection,
}

impl Default for WeaponParams {
    fn default() -> Self {
        Self {
            firing_delay: 0.1,
            heat_capacity: 20.0,
            heat_cooldown_target: 25.0,
            heat_reduce_factor: 6.0,
            projectile_speed: 10.0,
            projectile_damage: 100,
            projectile_lifetime: 1.5,
            direction: FireDirection::Up,
        }
    }
}

/// Weapon state of a player ship.
#[derive(Component, Clone, Debug, Serialize)]
pub struct WeaponController {
    pub params: WeaponParams,
    /// Current heat. May dip slightly below zero for a frame.
    pub heat: f32,
    /// Shortens the firing period and scales capacity/cooldown target.
    pub fire_rate: Boost,
    /// Scales projectile size.
    pub laser_size: Boost,
    /// Seconds of triple shot left.
    pub triple_shot_remaining: f32,
    /// Countdown to the next shot; `None` while not firing.
    next_shot_in: Option<f32>,
}

impl WeaponController {
    pub fn new(params: WeaponParams) -> Self {
        Self {
            params,
            heat: 0.0,
            fire_rate: Boost::new(),
            laser_size: Boost::with_expiry_threshold(LASER_SIZE_EXPIRY_THRESHOLD),
            triple_shot_remaining: 0.0,
            next_shot_in: None,
        }
    }

    /// Effective heat capacity, scaled by the active fire-rate multiplier.
    pub fn heat_capacity(&self) -> f32 {
        self.params.heat_capacity * self.fire_rate.multiplier
    }

    /// Effective overheat target, scaled by the active fire-rate multiplier.
    pub fn heat_cooldown_target(&self) -> f32 {
        self.params.heat_cooldown_target * self.fire_rate.multiplier
    }

    pub fn is_overheated(&self) -> bool {
        self.heat >= self.heat_capacity()
    }

    pub fn is_firing(&self) -> bool {
        self.next_shot_in.is_some()
    }

    /// Heat as a fraction of capacity, clamped to `[0, 1]`.
    pub fn heat_indicator(&self) -> f32 {
        let capacity = self.heat_capacity();
        if capacity <= 0.0 {
            return 1.0;
        }
        (self.heat / capacity).clamp(0.0, 1.0)
    }

    pub fn firing_delay(&self) -> f32 {
        self.params.firing_delay
    }

    pub fn set_firing_delay(&mut self, firing_delay: f32) -> f32 {
        self.params.firing_delay = firing_delay.max(0.0);
        self.params.firing_delay
    }

    /// Seconds between shots with the current fire-rate multiplier.
    pub fn firing_period(&self) -> f32 {
        self.params.firing_delay / self.fire_rate.multiplier
    }

    pub fn apply_fire_rate_boost(&mut self, multiplier: f32, duration: f32) {
        if self.fire_rate.apply(multiplier, duration) {
            debug!(
                "Fire-rate boost x{} for {:.2}s, heat capacity {}",
                self.fire_rate.multiplier,
                self.fire_rate.remaining,
                self.heat_capacity()
            );
        }
    }

    pub fn apply_laser_size_boost(&mut self, multiplier: f32, duration: f32) {
        if self.laser_size.apply(multiplier, duration) {
            debug!(
                "Laser-size boost x{} for {:.2}s",
                self.laser_size.multiplier, self.laser_size.remaining
            );
        }
    }

    /// Add `duration` seconds of triple shot. Always stacks.
    pub fn apply_triple_shot(&mut self, duration: f32) {
        self.triple_shot_remaining += duration.max(0.0);
        debug!("Triple shot for {:.2}s", self.triple_shot_remaining);
    }

    /// Count down all boost slots by `dt`.
    pub fn tick_boosts(&mut self, dt: f32) {
        if self.fire_rate.tick(dt) {
            debug!(
                "Fire-rate boost expired, heat capacity back to {}",
                self.heat_capacity()
            );
        }
        if self.laser_size.tick(dt) {
            debug!("Laser-size boost expired");
        }
        if self.triple_shot_remaining > 0.0 {
            self.triple_shot_remaining = (self.triple_shot_remaining - dt).max(0.0);
            if self.triple_shot_remaining == 0.0 {
                debug!("Triple shot expired");
            }
        }
    }

    /// Begin the continuous-fire loop. The first shot is due immediately.
    ///
    /// Returns `false` if the loop was already running.
    pub fn start_firing(&mut self) -> bool {
        if self.next_shot_in.is_some() {
            return false;
        }
        self.next_shot_in = Some(0.0);
        debug!("Firing started");
        true
    }

    /// Cancel the continuous-fire loop and its pending shot.
    ///
    /// Returns `false` if the loop was not running.
    pub fn stop_firing(&mut self) -> bool {
        if self.next_shot_in.take().is_none() {
            return false;
        }
        debug!("Firing stopped");
        true
    }

    /// Fire one shot from `origin` unless the weapon is overheated.
    ///
    /// An overheated weapon returns an empty volley and leaves heat alone.
    pub fn try_shoot(&mut self, origin: Vec2) -> Volley {
        let mut volley = Volley::new();
        if self.is_overheated() {
            return volley;
        }

        let velocity = Vec2::new(
            0.0,
            self.params.projectile_speed * self.params.direction.sign(),
        );
        let offsets: &[Vec2] = if self.triple_shot_remaining > 0.0 {
            &TRIPLE_SHOT_OFFSETS
        } else {
            &SINGLE_SHOT_OFFSETS
        };
        for offset in offsets {
            volley.push(ProjectileSpawn {
                origin: origin + *offset,
                velocity,
                damage: self.params.projectile_damage,
                lifetime: self.params.projectile_lifetime,
                scale: self.laser_size.multiplier,
            });
        }

        self.heat_weapon();
        volley
    }

    fn heat_weapon(&mut self) {
        self.heat += 1.0;
        if self.heat >= self.heat_capacity() {
            self.heat = self.heat_cooldown_target();
            info!("Weapon overheated, heat set to {}", self.heat);
        }
    }

    /// Advance the weapon by one frame.
    ///
    /// Firing runs while `fire_requested` or `move_requested` is set. Returns
    /// the projectiles fired this frame, if any.
    pub fn update(
        &mut self,
        dt: f32,
        fire_requested: bool,
        move_requested: bool,
        origin: Vec2,
    ) -> Volley {
        let dt = dt.max(0.0);

        self.tick_boosts(dt);

        let was_firing = self.is_firing();
        if fire_requested || move_requested {
            self.start_firing();
        } else {
            self.stop_firing();
        }

        let mut volley = Volley::new();
        if let Some(due) = self.next_shot_in {
            // A loop started this frame shoots right away.
            let due = if was_firing { due - dt } else { due };
            if due <= 0.0 {
                volley = self.try_shoot(origin);
                self.next_shot_in = Some(self.firing_period());
            } else {
                self.next_shot_in = Some(due);
            }
        }

        if self.heat >= 0.0 {
            self.heat -= dt * self.params.heat_reduce_factor;
        }

        volley
    }
}

/// Presentation value of the weapon heat, refreshed every frame.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct HeatGauge {
    /// Heat relative to capacity in `[0, 1]`.
    pub level: f32,
}
