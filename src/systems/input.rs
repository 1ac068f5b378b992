//! Input systems.
//!
//! [`update_input_state`] reads hardware input from raylib each frame and
//! writes the results into [`crate::resources::input::InputState`].
use bevy_ecs::prelude::*;
use raylib::prelude::MouseButton;

use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Poll raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    time: Res<WorldTime>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    for key in input.keys_mut() {
        let binding = key.key_binding;
        key.set(
            rl.is_key_down(binding),
            rl.is_key_pressed(binding),
            rl.is_key_released(binding),
        );
    }

    let button = MouseButton::MOUSE_BUTTON_LEFT;
    input.mouse.update(
        rl.get_mouse_position(),
        rl.get_mouse_wheel_move(),
        rl.is_mouse_button_down(button),
        rl.is_mouse_button_pressed(button),
        rl.is_mouse_button_released(button),
        time.elapsed,
    );
}
