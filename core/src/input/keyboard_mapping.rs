//! Keyboard to menu action mapping

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use super::keycode_serde::{deserialize_keycode, serialize_keycode};
use super::state::Key;

/// Physical keys bound to each logical demo key, serialized by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardMapping {
    #[serde(
        default = "default_menu_up",
        serialize_with = "serialize_keycode",
        deserialize_with = "deserialize_keycode"
    )]
    pub menu_up: KeyCode,
    #[serde(
        default = "default_menu_down",
        serialize_with = "serialize_keycode",
        deserialize_with = "deserialize_keycode"
    )]
    pub menu_down: KeyCode,
    #[serde(
        default = "default_value_decrease",
        serialize_with = "serialize_keycode",
        deserialize_with = "deserialize_keycode"
    )]
    pub value_decrease: KeyCode,
    #[serde(
        default = "default_value_increase",
        serialize_with = "serialize_keycode",
        deserialize_with = "deserialize_keycode"
    )]
    pub value_increase: KeyCode,
    #[serde(
        default = "default_exit",
        serialize_with = "serialize_keycode",
        deserialize_with = "deserialize_keycode"
    )]
    pub exit: KeyCode,
}

fn default_menu_up() -> KeyCode {
    KeyCode::ArrowUp
}
fn default_menu_down() -> KeyCode {
    KeyCode::ArrowDown
}
fn default_value_decrease() -> KeyCode {
    KeyCode::ArrowLeft
}
fn default_value_increase() -> KeyCode {
    KeyCode::ArrowRight
}
fn default_exit() -> KeyCode {
    KeyCode::Escape
}

impl Default for KeyboardMapping {
    fn default() -> Self {
        Self {
            menu_up: default_menu_up(),
            menu_down: default_menu_down(),
            value_decrease: default_value_decrease(),
            value_increase: default_value_increase(),
            exit: default_exit(),
        }
    }
}

impl KeyboardMapping {
    /// Physical key bound to a logical key
    pub fn key_code(&self, key: Key) -> KeyCode {
        match key {
            Key::Up => self.menu_up,
            Key::Down => self.menu_down,
            Key::Left => self.value_decrease,
            Key::Right => self.value_increase,
            Key::Exit => self.exit,
        }
    }
}
