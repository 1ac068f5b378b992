//! Debug overlay toggle.
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;

/// Insert or remove [`DebugMode`] when the debug key is pressed.
pub fn toggle_debug_mode(
    input: Res<InputState>,
    debug: Option<Res<DebugMode>>,
    mut commands: Commands,
) {
    if !input.mode_debug.just_pressed {
        return;
    }
    if debug.is_some() {
        commands.remove_resource::<DebugMode>();
        info!("Debug overlay disabled");
    } else {
        commands.insert_resource(DebugMode {});
        info!("Debug overlay enabled");
    }
}
