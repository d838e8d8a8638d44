//! Ship systems.
//!
//! This module groups all ECS systems that advance the player ship's weapon,
//! its projectiles and its hit feedback.
//!
//! Submodules overview
//! - [`boost`] – observer applying weapon boost pickups
//! - [`hitfeedback`] – hit observer and per-frame flash/blink animation
//! - [`movement`] – move projectiles along their velocity
//! - [`projectile`] – spawn projectile entities from weapon messages
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – despawn projectiles whose lifetime ran out
//! - [`weapon`] – heat, boosts and continuous fire of every weapon

pub mod boost;
pub mod hitfeedback;
pub mod movement;
pub mod projectile;
pub mod time;
pub mod ttl;
pub mod weapon;
