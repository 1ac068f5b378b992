//! Solid rectangle drawn through the camera.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// A `width` x `height` filled rectangle with its top-left at the entity's
/// [`MapPosition`](crate::components::mapposition::MapPosition).
#[derive(Component, Clone, Copy, Debug)]
pub struct Block {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Block {
    pub fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    /// Center relative to the top-left corner.
    pub fn half_extents(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }
}
