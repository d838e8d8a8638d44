//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource holds world-wide integer counters for
//! cross-system communication, e.g. the number of projectiles spawned so far.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Integer signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
}

impl WorldSignals {
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }

    /// Add `by` to an integer signal, starting from zero.
    pub fn increment(&mut self, key: &str, by: i32) -> i32 {
        let value = self.integers.entry(key.to_string()).or_insert(0);
        *value += by;
        *value
    }
}
