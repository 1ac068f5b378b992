//! Keyboard-driven movement.

use bevy_ecs::prelude::Component;

/// Moves the entity with the direction keys at `speed` world units per tick.
///
/// A tick is 1/60 s; the movement system scales by the frame delta.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
