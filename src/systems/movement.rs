//! Keyboard-driven movement for [`InputControlled`] entities.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Move every input-controlled entity along the pressed directions.
///
/// Axes are independent, so diagonals are faster, like the top-down demo
/// this drives.
pub fn input_movement(
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut query: Query<(&InputControlled, &mut MapPosition)>,
) {
    let (dx, dy) = (input.horizontal(), input.vertical());
    if dx == 0.0 && dy == 0.0 {
        return;
    }
    let ticks = time.ticks();
    for (controlled, mut position) in query.iter_mut() {
        position.pos.x += dx * controlled.speed * ticks;
        position.pos.y += dy * controlled.speed * ticks;
    }
}
