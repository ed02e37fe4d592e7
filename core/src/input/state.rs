//! Per-frame input snapshots and edge detection
//!
//! Devices are polled once per frame into an [`InputSnapshot`]. Edge-triggered
//! actions compare it against the previous frame's snapshot through an
//! [`InputFrame`].

use glam::Vec2;

/// Logical keys the demo reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Exit,
}

impl Key {
    pub const ALL: [Key; 5] = [Key::Up, Key::Down, Key::Left, Key::Right, Key::Exit];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Held state of every logical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    held: u8,
}

impl KeyboardState {
    /// State with exactly the given keys held
    pub fn with_keys(keys: &[Key]) -> Self {
        let mut state = Self::default();
        for &key in keys {
            state.set(key, true);
        }
        state
    }

    pub fn set(&mut self, key: Key, down: bool) {
        if down {
            self.held |= key.bit();
        } else {
            self.held &= !key.bit();
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    pub fn is_up(&self, key: Key) -> bool {
        !self.is_down(key)
    }
}

/// Cursor position in window pixels and the left button
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_button: bool,
}

/// First gamepad slot. Stick y is positive when pushed up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GamePadState {
    pub connected: bool,
    pub back: bool,
    pub left_stick: Vec2,
}

/// Everything polled from the input devices in one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
    pub gamepad: GamePadState,
}

/// Current snapshot paired with the one from the frame before
#[derive(Debug, Clone, Copy)]
pub struct InputFrame<'a> {
    pub current: &'a InputSnapshot,
    pub previous: &'a InputSnapshot,
}

impl<'a> InputFrame<'a> {
    pub fn new(current: &'a InputSnapshot, previous: &'a InputSnapshot) -> Self {
        Self { current, previous }
    }

    /// Rising edge: up last frame, down this frame
    pub fn key_pressed(&self, key: Key) -> bool {
        self.current.keyboard.is_down(key) && self.previous.keyboard.is_up(key)
    }

    pub fn key_held(&self, key: Key) -> bool {
        self.current.keyboard.is_down(key)
    }

    /// Falling edge of the left mouse button
    pub fn mouse_left_released(&self) -> bool {
        self.previous.mouse.left_button && !self.current.mouse.left_button
    }

    /// Horizontal cursor movement since last frame, in pixels
    pub fn mouse_dx(&self) -> f32 {
        self.current.mouse.x - self.previous.mouse.x
    }

    /// Stick y went from below `threshold` to at or above it.
    pub fn stick_y_crossed_up(&self, threshold: f32) -> bool {
        self.current.gamepad.left_stick.y >= threshold
            && self.previous.gamepad.left_stick.y < threshold
    }

    /// Stick y went from above `-threshold` to at or below it.
    pub fn stick_y_crossed_down(&self, threshold: f32) -> bool {
        self.current.gamepad.left_stick.y <= -threshold
            && self.previous.gamepad.left_stick.y > -threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stick(y: f32) -> InputSnapshot {
        InputSnapshot {
            gamepad: GamePadState {
                connected: true,
                back: false,
                left_stick: Vec2::new(0.0, y),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_keyboard_set_and_clear() {
        let mut state = KeyboardState::default();
        state.set(Key::Left, true);
        state.set(Key::Exit, true);
        assert!(state.is_down(Key::Left));
        assert!(state.is_down(Key::Exit));
        assert!(state.is_up(Key::Right));

        state.set(Key::Left, false);
        assert!(state.is_up(Key::Left));
        assert!(state.is_down(Key::Exit));
    }

    #[test]
    fn test_key_pressed_only_on_rising_edge() {
        let up = InputSnapshot {
            keyboard: KeyboardState::with_keys(&[Key::Down]),
            ..Default::default()
        };
        let none = InputSnapshot::default();

        assert!(InputFrame::new(&up, &none).key_pressed(Key::Down));
        assert!(!InputFrame::new(&up, &up).key_pressed(Key::Down));
        assert!(InputFrame::new(&up, &up).key_held(Key::Down));
        assert!(!InputFrame::new(&none, &up).key_pressed(Key::Down));
    }

    #[test]
    fn test_mouse_release_edge() {
        let pressed = InputSnapshot {
            mouse: MouseState {
                left_button: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let released = InputSnapshot::default();

        assert!(InputFrame::new(&released, &pressed).mouse_left_released());
        assert!(!InputFrame::new(&pressed, &released).mouse_left_released());
        assert!(!InputFrame::new(&pressed, &pressed).mouse_left_released());
    }

    #[test]
    fn test_stick_crossings() {
        assert!(InputFrame::new(&stick(0.5), &stick(0.49)).stick_y_crossed_up(0.5));
        assert!(!InputFrame::new(&stick(0.9), &stick(0.5)).stick_y_crossed_up(0.5));
        assert!(InputFrame::new(&stick(-0.5), &stick(-0.2)).stick_y_crossed_down(0.5));
        assert!(!InputFrame::new(&stick(-0.8), &stick(-0.5)).stick_y_crossed_down(0.5));
        assert!(!InputFrame::new(&stick(0.0), &stick(1.0)).stick_y_crossed_down(0.5));
    }
}
