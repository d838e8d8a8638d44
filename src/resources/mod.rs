//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world and accessed by systems during
//! execution.
//!
//! Overview
//! - `gameconfig` – weapon and hit-feedback parameters loaded from an INI file
//! - `input` – per-frame fire button and movement snapshot
//! - `worldsignals` – global counters
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod input;
pub mod worldsignals;
pub mod worldtime;
