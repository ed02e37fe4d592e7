//! Deadzone application for analog inputs

use super::InputManager;

impl InputManager {
    /// Apply deadzone to one analog stick axis
    #[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
    pub(super) fn apply_stick_deadzone(&self, value: f32) -> f32 {
        let deadzone = self.config.effective_deadzone();
        if value.abs() < deadzone {
            0.0
        } else {
            // Scale to full range after deadzone
            let sign = value.signum();
            let magnitude = (value.abs() - deadzone) / (1.0 - deadzone);
            sign * magnitude.clamp(0.0, 1.0)
        }
    }
}
