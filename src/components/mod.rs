//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`boost`] – timed multiplier slot used by the weapon boosts
//! - [`gradient`] – color gradient sampled by health ratio
//! - [`health`] – current and initial hit points
//! - [`hitfeedback`] – stage sprites, gradient, flash pulse and background blink on hit
//! - [`inputcontrolled`] – marks the ship driven by player input
//! - [`mapposition`] – world-space position for an entity
//! - [`projectile`] – velocity, damage and size of a fired projectile
//! - [`sprite`] – texture key of the displayed sprite
//! - [`tint`] – display color
//! - [`ttl`] – countdown that despawns the entity
//! - [`weaponcontroller`] – heat, boosts and continuous fire of the player weapon

pub mod boost;
pub mod gradient;
pub mod health;
pub mod hitfeedback;
pub mod inputcontrolled;
pub mod mapposition;
pub mod projectile;
pub mod sprite;
pub mod tint;
pub mod ttl;
pub mod weaponcontroller;
