use raylib::prelude::*;

/// Key presses the app reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Left,
    Right,
    Reset,
}

/// Everything the app reads from the platform in one frame.
///
/// Captured once per frame from raylib, so the rest of the app never
/// touches the window and can be driven by hand in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInput {
    /// Seconds since the window opened
    pub time: f64,
    pub viewport: Vector2,
    pub pointer: Vector2,
    /// Primary button went down this frame
    pub pressed: bool,
    /// Primary button is held
    pub down: bool,
    /// Primary button went up this frame
    pub released: bool,
    pub focused: bool,
    /// Wheel notches, positive away from the user
    pub wheel: f32,
    pub keys: Vec<KeyPress>,
}

impl FrameInput {
    /// A frame with no input at all
    pub fn idle(time: f64, viewport: Vector2) -> Self {
        Self {
            time,
            viewport,
            pointer: Vector2::new(-1.0, -1.0),
            pressed: false,
            down: false,
            released: false,
            focused: true,
            wheel: 0.0,
            keys: Vec::new(),
        }
    }

    pub fn capture(rl: &RaylibHandle) -> Self {
        let mut keys = Vec::new();
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            keys.push(KeyPress::Left);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            keys.push(KeyPress::Right);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) || rl.is_key_pressed(KeyboardKey::KEY_HOME) {
            keys.push(KeyPress::Reset);
        }

        Self {
            time: rl.get_time(),
            viewport: Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32),
            pointer: rl.get_mouse_position(),
            pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            down: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
            released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
            focused: rl.is_window_focused(),
            wheel: rl.get_mouse_wheel_move(),
            keys,
        }
    }
}
