//! Per-frame demo update
//!
//! [`DemoController`] turns one frame of input into menu navigation and fog
//! edits, then pushes the fog state into every effect of the scene.

use tracing::debug;

use crate::effect::EffectHost;
use crate::fog::FogParameters;
use crate::input::{InputFrame, InputSnapshot, Key, KeyboardState};
use crate::menu::MenuCursor;
use crate::overlay::Overlay;

/// Stick deflection that counts as a menu step
pub const STICK_MENU_THRESHOLD: f32 = 0.5;

/// Value change per pixel of horizontal mouse drag
pub const MOUSE_DRAG_SCALE: f32 = 0.005;

/// What the host loop should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Default)]
pub struct DemoController {
    fog: FogParameters,
    cursor: MenuCursor,
    previous: InputSnapshot,
}

impl DemoController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fog(&self) -> &FogParameters {
        &self.fog
    }

    pub fn cursor(&self) -> &MenuCursor {
        &self.cursor
    }

    /// Run one frame.
    ///
    /// Exit requests return before anything else changes, including the fog
    /// commit. Otherwise the fog parameters are written to every effect even
    /// when nothing was edited.
    pub fn update(
        &mut self,
        current: InputSnapshot,
        elapsed_seconds: f32,
        effects: &mut impl EffectHost,
    ) -> UpdateOutcome {
        if current.gamepad.back || current.keyboard.is_down(Key::Exit) {
            return UpdateOutcome::Exit;
        }

        let frame = InputFrame::new(&current, &self.previous);

        if frame.key_pressed(Key::Up) || frame.stick_y_crossed_up(STICK_MENU_THRESHOLD) {
            self.cursor.move_up();
            debug!("Menu selection: {:?}", self.cursor.selected());
        }

        if frame.key_pressed(Key::Down)
            || frame.stick_y_crossed_down(STICK_MENU_THRESHOLD)
            || frame.mouse_left_released()
        {
            self.cursor.move_down();
            debug!("Menu selection: {:?}", self.cursor.selected());
        }

        let move_value = Self::move_value(&frame, elapsed_seconds);
        if move_value != 0.0 {
            self.fog.apply(self.cursor.selected(), move_value);
        }

        let fog = self.fog;
        effects.for_each_effect(&mut |effect| effect.set_fog(&fog));

        self.previous = current;
        UpdateOutcome::Continue
    }

    /// Treat held keys and the mouse button as released last frame.
    ///
    /// Call together with [`crate::InputManager::release_all`] so the next
    /// update sees no release edge.
    pub fn release_held_input(&mut self) {
        self.previous.keyboard = KeyboardState::default();
        self.previous.mouse.left_button = false;
    }

    /// Sum of every value-changing input this frame.
    pub fn move_value(frame: &InputFrame<'_>, elapsed_seconds: f32) -> f32 {
        let mut move_value = 0.0;

        if frame.key_held(Key::Left) {
            move_value -= elapsed_seconds;
        }
        if frame.key_held(Key::Right) {
            move_value += elapsed_seconds;
        }

        if frame.current.mouse.left_button {
            move_value += frame.mouse_dx() * MOUSE_DRAG_SCALE;
        }

        let gamepad = &frame.current.gamepad;
        if gamepad.connected {
            move_value += gamepad.left_stick.x * elapsed_seconds;
        }

        move_value
    }

    /// Text draw list reflecting the current state
    pub fn overlay(&self) -> Overlay {
        Overlay::build(&self.fog, &self.cursor)
    }
}
