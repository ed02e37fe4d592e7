//! Gamepad input handling

use gilrs::{Axis, Button};
use glam::Vec2;

use super::InputManager;
use crate::input::state::GamePadState;

impl InputManager {
    /// Read the pad's back button and left stick
    pub(super) fn read_gamepad_state(&self, gamepad: &gilrs::Gamepad) -> GamePadState {
        if !gamepad.is_connected() {
            return GamePadState::default();
        }

        let axis = |axis: Axis| -> f32 { self.apply_stick_deadzone(gamepad.value(axis)) };

        GamePadState {
            connected: true,
            // Select is the Back/View button in the Xbox layout
            back: gamepad.is_pressed(Button::Select),
            // gilrs reports stick y with up positive
            left_stick: Vec2::new(axis(Axis::LeftStickX), axis(Axis::LeftStickY)),
        }
    }
}
