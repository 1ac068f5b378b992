//! Per-frame input resource.
//!
//! Captures the keyboard and mouse state the demos and camera controls care
//! about and exposes it to systems via [`InputState`]. Systems never talk to
//! raylib directly for input, which keeps them testable without a window.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// Inactive state bound to `key`.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    pub fn set(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

/// Left mouse button and pointer state.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    /// Cursor position in screen pixels.
    pub position: Vector2,
    /// Cursor position on the previous frame.
    pub previous: Vector2,
    /// Wheel movement this frame; positive is away from the user.
    pub wheel: f32,
    pub left_down: bool,
    pub left_pressed: bool,
    pub left_released: bool,
    /// Cursor position when the left button was last pressed.
    pub press_position: Vector2,
    /// World time (seconds) when the left button was last pressed.
    pub pressed_at: f32,
}

impl MouseState {
    /// Record a new frame of pointer data. `now` is the current world time.
    pub fn update(
        &mut self,
        position: Vector2,
        wheel: f32,
        down: bool,
        pressed: bool,
        released: bool,
        now: f32,
    ) {
        self.previous = self.position;
        self.position = position;
        self.wheel = wheel;
        self.left_down = down;
        self.left_pressed = pressed;
        self.left_released = released;
        if pressed {
            self.press_position = position;
            self.pressed_at = now;
        }
    }

    /// Screen distance travelled since the button went down.
    pub fn press_travel(&self) -> Vector2 {
        Vector2 {
            x: self.position.x - self.press_position.x,
            y: self.position.y - self.press_position.y,
        }
    }
}

/// Resource capturing the per-frame input relevant to the demos.
///
/// Directions have a primary binding (arrows) and an alternative one (H/N
/// for left/right), matching the platformer's controls.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    pub alt_left: BoolState,
    pub alt_right: BoolState,
    pub jump: BoolState,
    /// Toggle camera follow mode.
    pub follow_toggle: BoolState,
    /// Rotate the camera clockwise.
    pub rotate_cw: BoolState,
    /// Rotate the camera counter-clockwise.
    pub rotate_ccw: BoolState,
    /// Spin the controlled entity.
    pub spin: BoolState,
    pub zoom_reset: BoolState,
    pub zoom_double: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
    pub mouse: MouseState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound(KeyboardKey::KEY_UP),
            direction_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            direction_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            direction_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            alt_left: BoolState::bound(KeyboardKey::KEY_H),
            alt_right: BoolState::bound(KeyboardKey::KEY_N),
            jump: BoolState::bound(KeyboardKey::KEY_SPACE),
            follow_toggle: BoolState::bound(KeyboardKey::KEY_F),
            rotate_cw: BoolState::bound(KeyboardKey::KEY_G),
            rotate_ccw: BoolState::bound(KeyboardKey::KEY_R),
            spin: BoolState::bound(KeyboardKey::KEY_E),
            zoom_reset: BoolState::bound(KeyboardKey::KEY_W),
            zoom_double: BoolState::bound(KeyboardKey::KEY_S),
            action_back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
            mouse: MouseState::default(),
        }
    }
}

impl InputState {
    /// All key states, for bulk polling.
    pub fn keys_mut(&mut self) -> [&mut BoolState; 15] {
        [
            &mut self.direction_up,
            &mut self.direction_down,
            &mut self.direction_left,
            &mut self.direction_right,
            &mut self.alt_left,
            &mut self.alt_right,
            &mut self.jump,
            &mut self.follow_toggle,
            &mut self.rotate_cw,
            &mut self.rotate_ccw,
            &mut self.spin,
            &mut self.zoom_reset,
            &mut self.zoom_double,
            &mut self.action_back,
            &mut self.mode_debug,
        ]
    }

    /// Horizontal direction in -1..=1 from the primary and alternative keys.
    pub fn horizontal(&self) -> f32 {
        let left = self.direction_left.active || self.alt_left.active;
        let right = self.direction_right.active || self.alt_right.active;
        (right as i32 - left as i32) as f32
    }

    /// Vertical direction in -1..=1; positive is down the screen.
    pub fn vertical(&self) -> f32 {
        (self.direction_down.active as i32 - self.direction_up.active as i32) as f32
    }
}
