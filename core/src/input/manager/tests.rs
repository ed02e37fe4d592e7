//! Tests for InputManager

use super::super::{InputConfig, KeyboardMapping, MAX_STICK_DEADZONE};
use super::InputManager;
use crate::input::keycode_serde::{keycode_to_string, string_to_keycode};
use crate::input::state::Key;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

#[test]
fn test_keycode_to_string_letters() {
    assert_eq!(keycode_to_string(&KeyCode::KeyA), "A");
    assert_eq!(keycode_to_string(&KeyCode::KeyZ), "Z");
}

#[test]
fn test_keycode_to_string_arrows() {
    assert_eq!(keycode_to_string(&KeyCode::ArrowUp), "ArrowUp");
    assert_eq!(keycode_to_string(&KeyCode::ArrowDown), "ArrowDown");
    assert_eq!(keycode_to_string(&KeyCode::ArrowLeft), "ArrowLeft");
    assert_eq!(keycode_to_string(&KeyCode::ArrowRight), "ArrowRight");
}

#[test]
fn test_keycode_to_string_unmapped() {
    assert_eq!(keycode_to_string(&KeyCode::Pause), "Unknown");
}

#[test]
fn test_string_to_keycode() {
    assert_eq!(string_to_keycode("Escape"), Some(KeyCode::Escape));
    assert_eq!(string_to_keycode("W"), Some(KeyCode::KeyW));
    assert_eq!(string_to_keycode("InvalidKey"), None);
    assert_eq!(string_to_keycode(""), None);
}

#[test]
fn test_keyboard_mapping_roundtrip() {
    let mapping = KeyboardMapping::default();

    let toml_str = toml::to_string(&mapping).expect("serialize");
    assert!(toml_str.contains("ArrowUp"));
    assert!(toml_str.contains("ArrowLeft"));
    assert!(toml_str.contains("Escape"));

    let mapping2: KeyboardMapping = toml::from_str(&toml_str).expect("deserialize");
    assert_eq!(mapping, mapping2);
}

#[test]
fn test_keyboard_mapping_custom_keys() {
    let toml_str = r#"
        menu_up = "W"
        menu_down = "S"
        value_decrease = "A"
        value_increase = "D"
        exit = "Q"
    "#;

    let mapping: KeyboardMapping = toml::from_str(toml_str).expect("deserialize");
    assert_eq!(mapping.menu_up, KeyCode::KeyW);
    assert_eq!(mapping.menu_down, KeyCode::KeyS);
    assert_eq!(mapping.value_decrease, KeyCode::KeyA);
    assert_eq!(mapping.value_increase, KeyCode::KeyD);
    assert_eq!(mapping.exit, KeyCode::KeyQ);
}

#[test]
fn test_keyboard_mapping_partial_uses_defaults() {
    let mapping: KeyboardMapping = toml::from_str(r#"exit = "Backspace""#).expect("deserialize");
    assert_eq!(mapping.exit, KeyCode::Backspace);
    assert_eq!(mapping.menu_up, KeyCode::ArrowUp);
    assert_eq!(mapping.value_increase, KeyCode::ArrowRight);
}

#[test]
fn test_keyboard_mapping_unknown_key_rejected() {
    let result: Result<KeyboardMapping, _> = toml::from_str(r#"menu_up = "NotAKey""#);
    let err = result.expect_err("unknown key should fail");
    assert!(err.to_string().contains("Unknown key name"));
}

#[test]
fn test_all_keys_are_distinct_by_default() {
    let mapping = KeyboardMapping::default();
    let keys = Key::ALL.map(|key| mapping.key_code(key));
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_input_config_roundtrip() {
    let config = InputConfig {
        stick_deadzone: 0.3,
        ..Default::default()
    };

    let toml_str = toml::to_string(&config).expect("serialize");
    let config2: InputConfig = toml::from_str(&toml_str).expect("deserialize");
    assert_eq!(config, config2);
}

#[test]
fn test_input_config_empty_uses_defaults() {
    let config: InputConfig = toml::from_str("").expect("deserialize");
    assert_eq!(config, InputConfig::default());
    assert_eq!(config.stick_deadzone, 0.24);
}

#[test]
fn test_stick_deadzone() {
    let manager = InputManager::new(InputConfig::default());

    assert_eq!(manager.apply_stick_deadzone(0.0), 0.0);
    assert_eq!(manager.apply_stick_deadzone(0.1), 0.0);
    assert_eq!(manager.apply_stick_deadzone(-0.2), 0.0);

    assert_eq!(manager.apply_stick_deadzone(1.0), 1.0);
    assert_eq!(manager.apply_stick_deadzone(-1.0), -1.0);

    let mid = manager.apply_stick_deadzone(0.62);
    assert!((mid - 0.5).abs() < 1e-5, "got {mid}");
    let mid = manager.apply_stick_deadzone(-0.62);
    assert!((mid + 0.5).abs() < 1e-5, "got {mid}");
}

#[test]
fn test_zero_deadzone_passes_through() {
    let manager = InputManager::new(InputConfig {
        stick_deadzone: 0.0,
        ..Default::default()
    });
    assert_eq!(manager.apply_stick_deadzone(0.05), 0.05);
    assert_eq!(manager.apply_stick_deadzone(-0.75), -0.75);
}

#[test]
fn test_full_deadzone_stays_finite() {
    let manager = InputManager::new(InputConfig {
        stick_deadzone: 1.0,
        ..Default::default()
    });

    for value in [1.0, -1.0, 0.97, 0.5] {
        let out = manager.apply_stick_deadzone(value);
        assert!(out.is_finite(), "{} -> {}", value, out);
        assert!((-1.0..=1.0).contains(&out), "{} -> {}", value, out);
    }
    assert_eq!(manager.apply_stick_deadzone(1.0), 1.0);
    assert_eq!(manager.apply_stick_deadzone(0.5), 0.0);
}

#[test]
fn test_out_of_range_deadzones_are_limited() {
    let config = |stick_deadzone| InputConfig {
        stick_deadzone,
        ..Default::default()
    };
    assert_eq!(config(1.0).effective_deadzone(), MAX_STICK_DEADZONE);
    assert_eq!(config(7.5).effective_deadzone(), MAX_STICK_DEADZONE);
    assert_eq!(config(-0.3).effective_deadzone(), 0.0);
    assert_eq!(config(f32::NAN).effective_deadzone(), 0.24);
    assert_eq!(config(0.3).effective_deadzone(), 0.3);
}

#[test]
fn test_keyboard_events_reach_snapshot() {
    let mut manager = InputManager::new(InputConfig::default());

    manager.update_keyboard(KeyCode::ArrowLeft, true);
    manager.update_keyboard(KeyCode::Escape, true);
    manager.update_keyboard(KeyCode::KeyX, true);

    let snapshot = manager.snapshot();
    assert!(snapshot.keyboard.is_down(Key::Left));
    assert!(snapshot.keyboard.is_down(Key::Exit));
    assert!(snapshot.keyboard.is_up(Key::Right));
    assert!(snapshot.keyboard.is_up(Key::Up));

    manager.update_keyboard(KeyCode::ArrowLeft, false);
    assert!(manager.snapshot().keyboard.is_up(Key::Left));
}

#[test]
fn test_remapped_keys_reach_snapshot() {
    let mut config = InputConfig::default();
    config.keyboard.menu_up = KeyCode::KeyW;
    let mut manager = InputManager::new(config);

    manager.update_keyboard(KeyCode::ArrowUp, true);
    assert!(manager.snapshot().keyboard.is_up(Key::Up));

    manager.update_keyboard(KeyCode::KeyW, true);
    assert!(manager.snapshot().keyboard.is_down(Key::Up));
}

#[test]
fn test_mouse_events_reach_snapshot() {
    let mut manager = InputManager::new(InputConfig::default());

    manager.update_cursor(120.0, 45.5);
    manager.update_mouse_button(MouseButton::Left, true);
    manager.update_mouse_button(MouseButton::Right, false);

    let mouse = manager.snapshot().mouse;
    assert_eq!(mouse.x, 120.0);
    assert_eq!(mouse.y, 45.5);
    assert!(mouse.left_button);

    manager.update_mouse_button(MouseButton::Left, false);
    assert!(!manager.snapshot().mouse.left_button);
}

#[test]
fn test_release_all_clears_held_input() {
    let mut manager = InputManager::new(InputConfig::default());
    manager.update_keyboard(KeyCode::ArrowRight, true);
    manager.update_mouse_button(MouseButton::Left, true);
    manager.update_cursor(10.0, 10.0);

    manager.release_all();

    let snapshot = manager.snapshot();
    assert!(snapshot.keyboard.is_up(Key::Right));
    assert!(!snapshot.mouse.left_button);
    assert_eq!(snapshot.mouse.x, 10.0);
}
