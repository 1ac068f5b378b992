use bevy_ecs::prelude::Component;

/// Local rotation of an entity around its center, in radians.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub radians: f32,
}
