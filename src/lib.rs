//! Suicide Mission ship core.
//!
//! This module exposes the player ship's ECS components, resources, systems,
//! and events for use in integration tests and by the host game.

pub mod components;
pub mod events;
pub mod game;
pub mod math;
pub mod resources;
pub mod systems;
