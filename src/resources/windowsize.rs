//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels. The main loop refreshes it
//! every frame; the camera layout system resizes the camera when it changes.

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Size as unsigned pixels, with negative values treated as zero.
    pub fn as_u32(&self) -> (u32, u32) {
        (self.w.max(0) as u32, self.h.max(0) as u32)
    }
}
