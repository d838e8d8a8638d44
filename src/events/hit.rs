//! Hit notifications.
//!
//! Trigger a [`HitEvent`] once per damage event, after the ship's
//! [`Health`](crate::components::health::Health) has been updated. The
//! [`hit_feedback_observer`](crate::systems::hitfeedback::hit_feedback_observer)
//! starts the ship's hit-feedback animations in response.
//!
//! # Example
//!
//! ```ignore
//! world.get_mut::<Health>(ship).unwrap().apply_damage(100);
//! world.trigger(HitEvent { entity: ship });
//! ```

use bevy_ecs::prelude::*;

/// Event fired when a ship has taken damage.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEvent {
    /// The ship that was hit.
    pub entity: Entity,
}
