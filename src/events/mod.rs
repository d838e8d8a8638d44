//! Event and message types exchanged across systems.
//!
//! Events provide a decoupled way for the host game to talk to the ship
//! components without direct dependencies.
//!
//! Submodules:
//! - [`boost`] – weapon boost pickups, handled by an observer
//! - [`hit`] – damage notifications that start the hit feedback
//! - [`projectile`] – projectile spawn requests written by the weapon
pub mod boost;
pub mod hit;
pub mod projectile;
