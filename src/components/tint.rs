//! Display color component.
//!
//! The [`Tint`] component is the color an entity is shown with. Hit feedback
//! writes to it:
//! - on a ship: gradient color and flash pulse
//! - on a [`HitBackground`](crate::components::hitfeedback::HitBackground): the blinking alpha

use bevy_ecs::prelude::Component;

use crate::math::Color;

/// Display color of an entity.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    pub fn from_color(color: Color) -> Self {
        Self { color }
    }

    /// Alpha channel in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.color.alpha()
    }

    /// Replace the alpha channel, keeping RGB.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.color = self.color.with_alpha(alpha);
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}
