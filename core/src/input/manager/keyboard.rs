//! Keyboard input handling

use winit::keyboard::KeyCode;

use super::InputManager;
use crate::input::state::{Key, KeyboardState};

impl InputManager {
    /// Resolve physical key state to logical keys through the mapping
    pub(super) fn read_keyboard_state(&self) -> KeyboardState {
        let is_pressed =
            |key: KeyCode| -> bool { self.keyboard_state.get(&key).copied().unwrap_or(false) };

        let mapping = &self.config.keyboard;
        let mut state = KeyboardState::default();
        for key in Key::ALL {
            state.set(key, is_pressed(mapping.key_code(key)));
        }
        state
    }
}
