//! Input handling for keyboard, mouse and gamepad

mod keyboard_mapping;
pub(crate) mod keycode_serde; // Made pub(crate) for tests
mod manager;
mod state;

pub use keyboard_mapping::KeyboardMapping;
pub use manager::InputManager;
pub use state::{GamePadState, InputFrame, InputSnapshot, Key, KeyboardState, MouseState};

use serde::{Deserialize, Serialize};

/// Input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Keyboard bindings for the menu
    #[serde(default)]
    pub keyboard: KeyboardMapping,

    /// Deadzone for the left analog stick (0.0-1.0)
    #[serde(default = "default_deadzone")]
    pub stick_deadzone: f32,
}

/// Largest deadzone honoured; higher values would leave no usable range
pub const MAX_STICK_DEADZONE: f32 = 0.95;

fn default_deadzone() -> f32 {
    0.24
}

impl InputConfig {
    /// `stick_deadzone` limited to `[0, MAX_STICK_DEADZONE]`.
    /// A non-finite value falls back to the default.
    pub fn effective_deadzone(&self) -> f32 {
        if self.stick_deadzone.is_finite() {
            self.stick_deadzone.clamp(0.0, MAX_STICK_DEADZONE)
        } else {
            default_deadzone()
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keyboard: KeyboardMapping::default(),
            stick_deadzone: default_deadzone(),
        }
    }
}
