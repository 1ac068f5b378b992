//! Marks the entity the camera follows.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// The camera looks at this entity's position plus `offset`.
///
/// Only the first entity carrying the component is followed. Following can
/// be switched off at runtime through
/// [`CameraControls::follow`](crate::resources::cameracontrols::CameraControls).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraTarget {
    pub offset: Vector2,
}

impl CameraTarget {
    pub fn with_offset(x: f32, y: f32) -> Self {
        Self {
            offset: Vector2 { x, y },
        }
    }
}
