//! Timed multiplicative weapon boost.
//!
//! A [`Boost`] holds a multiplier and the time it has left. At most one
//! multiplier is active per boost slot:
//!
//! - applying a *different* multiplier replaces the active one and restarts
//!   the countdown with the new duration
//! - applying the *same* multiplier while it is still running extends the
//!   countdown additively
//!
//! When the countdown reaches the slot's expiry threshold the multiplier
//! falls back to `1.0` and `remaining` is zeroed.
//!
//! # Related
//!
//! - [`crate::components::weaponcontroller::WeaponController`] – owns the fire-rate and laser-size slots
//! - [`crate::events::boost::BoostEvent`] – event that applies a boost to a ship

use log::warn;
use serde::Serialize;

/// Multiplier and countdown for one boost slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Boost {
    /// Current multiplier, `1.0` when inactive.
    pub multiplier: f32,
    /// Seconds left before the multiplier expires.
    pub remaining: f32,
    /// The boost expires once `remaining` is at or below this value.
    pub expiry_threshold: f32,
}

impl Default for Boost {
    fn default() -> Self {
        Self::new()
    }
}

impl Boost {
    /// Inactive boost that expires when the countdown reaches zero.
    pub fn new() -> Self {
        Self {
            multiplier: 1.0,
            remaining: 0.0,
            expiry_threshold: 0.0,
        }
    }

    /// Inactive boost that expires as soon as `remaining <= threshold`.
    pub fn with_expiry_threshold(threshold: f32) -> Self {
        Self {
            expiry_threshold: threshold,
            ..Self::new()
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Apply `multiplier` for `duration` seconds.
    ///
    /// Returns `false` if the multiplier is rejected (non-finite or not
    /// strictly positive); the boost is left untouched in that case.
    pub fn apply(&mut self, multiplier: f32, duration: f32) -> bool {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            warn!("Ignoring boost with invalid multiplier {}", multiplier);
            return false;
        }
        let duration = duration.max(0.0);
        if self.remaining <= 0.0 || self.multiplier != multiplier {
            self.multiplier = multiplier;
            self.remaining = duration;
        } else {
            self.remaining += duration;
        }
        true
    }

    /// Count down by `dt`. Returns `true` on the tick the boost expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining > 0.0 {
            self.remaining -= dt;
        }
        if self.remaining <= self.expiry_threshold {
            let expired = self.multiplier != 1.0 || self.remaining != 0.0;
            self.remaining = 0.0;
            self.multiplier = 1.0;
            return expired;
        }
        false
    }
}
