use bevy_ecs::prelude::Component;

/// Sprite shown for an entity, identified by its texture key.
///
/// Hit feedback swaps the key to the current damage stage sprite.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub tex_key: String,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
        }
    }
}
