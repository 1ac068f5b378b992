//! Debug overlay toggle resource.
//!
//! The mere presence of this resource makes the demos print camera and
//! cursor state on screen. Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the overlay is drawn.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
