//! Camera control settings.
//!
//! Read by [`crate::systems::camera`] to turn input into camera motion.

use bevy_ecs::prelude::Resource;

use crate::resources::gameconfig::GameConfig;

/// How input moves the camera.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraControls {
    /// Zoom multiplier for a wheel step up.
    pub zoom_in: f32,
    /// Zoom multiplier for a wheel step down.
    pub zoom_out: f32,
    /// Radians per tick while a rotate key is held.
    pub rotate_step: f32,
    /// Seconds the left button must be held before dragging pans.
    pub pan_delay: f32,
    /// Follow the [`CameraTarget`](crate::components::cameratarget::CameraTarget)
    /// entity. Panning is disabled while following.
    pub follow: bool,
}

impl Default for CameraControls {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl CameraControls {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            zoom_in: config.zoom_in,
            zoom_out: config.zoom_out,
            rotate_step: config.rotate_step,
            pan_delay: config.pan_delay_secs(),
            follow: true,
        }
    }
}
