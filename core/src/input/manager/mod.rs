//! Input manager handling keyboard, mouse and gamepad

mod deadzone;
#[cfg(feature = "gamepad")]
mod gamepad;
mod keyboard;
#[cfg(test)]
mod tests;

#[cfg(feature = "gamepad")]
use gilrs::Gilrs;
use hashbrown::HashMap;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use super::InputConfig;
use super::state::{GamePadState, InputSnapshot, MouseState};

pub struct InputManager {
    /// Gilrs context for gamepad handling (None if initialization failed or gamepad feature disabled)
    #[cfg(feature = "gamepad")]
    gilrs: Option<Gilrs>,

    /// Gamepad bound to the first player slot
    #[cfg(feature = "gamepad")]
    active_gamepad: Option<gilrs::GamepadId>,

    /// Current keyboard state (key -> pressed)
    keyboard_state: HashMap<KeyCode, bool>,

    /// Latest cursor position and left button state
    mouse_state: MouseState,

    /// Last polled gamepad state
    gamepad_state: GamePadState,

    /// Input configuration
    config: InputConfig,
}

impl InputManager {
    /// Create a new input manager
    pub fn new(config: InputConfig) -> Self {
        #[cfg(feature = "gamepad")]
        let gilrs = match Gilrs::new() {
            Ok(g) => Some(g),
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize gamepad support: {}. Gamepads will not be available.",
                    e
                );
                None
            }
        };

        // Pads plugged in before startup don't always raise a Connected event
        #[cfg(feature = "gamepad")]
        let active_gamepad = gilrs
            .as_ref()
            .and_then(|g| g.gamepads().find(|(_, pad)| pad.is_connected()))
            .map(|(id, pad)| {
                tracing::info!("Using gamepad {} ({})", id, pad.name());
                id
            });

        Self {
            #[cfg(feature = "gamepad")]
            gilrs,
            #[cfg(feature = "gamepad")]
            active_gamepad,
            keyboard_state: HashMap::new(),
            mouse_state: MouseState::default(),
            gamepad_state: GamePadState::default(),
            config,
        }
    }

    /// Update keyboard state
    pub fn update_keyboard(&mut self, key: KeyCode, pressed: bool) {
        self.keyboard_state.insert(key, pressed);
    }

    /// Update cursor position (window pixels)
    pub fn update_cursor(&mut self, x: f32, y: f32) {
        self.mouse_state.x = x;
        self.mouse_state.y = y;
    }

    /// Update mouse button state. Only the left button is tracked.
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Left {
            self.mouse_state.left_button = pressed;
        }
    }

    /// Forget held keys and buttons, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.keyboard_state.clear();
        self.mouse_state.left_button = false;
    }

    /// Poll gamepad events and update input state
    #[cfg(feature = "gamepad")]
    pub fn update(&mut self) {
        if let Some(ref mut gilrs) = self.gilrs {
            while let Some(event) = gilrs.next_event() {
                match event.event {
                    gilrs::EventType::Connected => {
                        if self.active_gamepad.is_none() {
                            self.active_gamepad = Some(event.id);
                            tracing::info!("Gamepad {} connected", event.id);
                        } else {
                            tracing::debug!("Ignoring extra gamepad {}", event.id);
                        }
                    }
                    gilrs::EventType::Disconnected => {
                        if self.active_gamepad == Some(event.id) {
                            tracing::info!("Gamepad {} disconnected", event.id);
                            self.active_gamepad = None;
                        }
                    }
                    _ => {}
                }
            }
        }

        self.gamepad_state = match (&self.gilrs, self.active_gamepad) {
            (Some(gilrs), Some(id)) => self.read_gamepad_state(&gilrs.gamepad(id)),
            _ => GamePadState::default(),
        };
    }

    /// Poll events and update input state (no gamepad when the feature is disabled)
    #[cfg(not(feature = "gamepad"))]
    pub fn update(&mut self) {
        self.gamepad_state = GamePadState::default();
    }

    /// Snapshot of every device as of the last `update()`
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            keyboard: self.read_keyboard_state(),
            mouse: self.mouse_state,
            gamepad: self.gamepad_state,
        }
    }
}
