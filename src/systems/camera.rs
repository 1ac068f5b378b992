//! Camera systems.
//!
//! All systems are generic over the camera's [`Surface`] so the same code
//! drives a raylib-backed camera in the demos and a headless one in tests.
//! Register them with the concrete surface type, e.g.
//! `camera_controls::<RenderSurface>`.
//!
//! - [`camera_controls`] – follow toggle, rotate keys, wheel zoom, drag pan
//! - [`camera_follow`] – look at the [`CameraTarget`] entity
//! - [`camera_layout`] – resize the camera when the window size changes
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::camera::Camera;
use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::resources::cameracontrols::CameraControls;
use crate::resources::input::InputState;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::surface::Surface;

/// Apply user input to the camera.
///
/// - follow key toggles [`CameraControls::follow`]
/// - rotate keys turn by `rotate_step` per tick
/// - the wheel multiplies zoom by `zoom_in` / `zoom_out`
/// - holding the left button longer than `pan_delay` drags the view, unless
///   the camera is following a target
pub fn camera_controls<S: Surface + 'static>(
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut controls: ResMut<CameraControls>,
    mut camera: NonSendMut<Camera<S>>,
) {
    if input.follow_toggle.just_pressed {
        controls.follow = !controls.follow;
        info!("Camera follow: {}", controls.follow);
    }

    let ticks = time.ticks();
    if input.rotate_cw.active {
        camera.rotate(controls.rotate_step * ticks);
    }
    if input.rotate_ccw.active {
        camera.rotate(-controls.rotate_step * ticks);
    }

    let wheel = input.mouse.wheel;
    if wheel > 0.0 {
        camera.zoom(controls.zoom_in);
    } else if wheel < 0.0 {
        camera.zoom(controls.zoom_out);
    }

    let mouse = &input.mouse;
    let held_for = time.elapsed - mouse.pressed_at;
    if mouse.left_down && !mouse.left_pressed && !controls.follow && held_for > controls.pan_delay
    {
        // move by the world distance between the last two cursor positions,
        // so dragging tracks the cursor under any rotation and zoom
        let (px, py) = camera.screen_to_world(mouse.previous.x, mouse.previous.y);
        let (cx, cy) = camera.screen_to_world(mouse.position.x, mouse.position.y);
        camera.translate(px - cx, py - cy);
    }
}

/// Look at the first entity carrying [`CameraTarget`] while following is on.
pub fn camera_follow<S: Surface + 'static>(
    controls: Res<CameraControls>,
    mut camera: NonSendMut<Camera<S>>,
    query: Query<(&MapPosition, &CameraTarget)>,
) {
    if !controls.follow {
        return;
    }
    if let Some((position, target)) = query.iter().next() {
        camera.set_position(
            position.pos.x + target.offset.x,
            position.pos.y + target.offset.y,
        );
    }
}

/// Resize the camera to the window whenever the two disagree.
pub fn camera_layout<S: Surface + 'static>(
    window: Res<WindowSize>,
    mut camera: NonSendMut<Camera<S>>,
) {
    let (w, h) = window.as_u32();
    if (w, h) != (camera.width(), camera.height()) {
        debug!(
            "Window resized: {}x{} -> {}x{}",
            camera.width(),
            camera.height(),
            w,
            h
        );
        camera.resize(w, h);
    }
}
