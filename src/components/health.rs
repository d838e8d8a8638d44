use bevy_ecs::prelude::Component;
use serde::Serialize;

/// Hit points of a ship.
///
/// `initial` is fixed when the ship spawns; `current` is owned by whatever
/// applies damage.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Health {
    pub current: i32,
    pub initial: i32,
}

impl Health {
    pub fn new(initial: i32) -> Self {
        Self {
            current: initial,
            initial,
        }
    }

    /// Subtract `amount` and return the new current value.
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        self.current -= amount;
        self.current
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    /// `current / initial`, or `0.0` for a ship spawned with no health.
    pub fn ratio(&self) -> f32 {
        if self.initial <= 0 {
            return 0.0;
        }
        self.current as f32 / self.initial as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_full() {
        let h = Health::new(500);
        assert_eq!(h.current, 500);
        assert_eq!(h.initial, 500);
        assert_eq!(h.ratio(), 1.0);
    }

    #[test]
    fn test_apply_damage() {
        let mut h = Health::new(100);
        assert_eq!(h.apply_damage(30), 70);
        assert!(!h.is_dead());
        assert_eq!(h.apply_damage(80), -10);
        assert!(h.is_dead());
        assert_eq!(h.initial, 100);
    }

    #[test]
    fn test_ratio_with_zero_initial() {
        let h = Health::new(0);
        assert_eq!(h.ratio(), 0.0);
    }
}
