//! Text overlay layout
//!
//! Positions are window pixels from the top-left corner. Every string is
//! drawn twice, black first and then white one pixel up and left, giving a
//! drop shadow on any background.

use glam::Vec2;

use crate::fog::FogParameters;
use crate::menu::{MenuCursor, MenuItem};

/// Help text in the top-left corner, one entry per line
pub const INSTRUCTIONS: [&str; 4] = [
    "Up, Down : Select Menu",
    "Left, right : Change Value",
    "MouseClick & Drag :",
    "    Select Menu & Change Value",
];

const INSTRUCTION_ORIGIN: Vec2 = Vec2::new(20.0, 20.0);
const INSTRUCTION_SPACING: f32 = 25.0;

const MENU_TOP: f32 = 120.0;
const MENU_ROW_HEIGHT: f32 = 20.0;
const CURSOR_X: f32 = 20.0;
const LABEL_X: f32 = 40.0;
const VALUE_X: f32 = 220.0;

const CURSOR_GLYPH: &str = "*";

/// Offset of the foreground copy relative to its shadow
const SHADOW_OFFSET: Vec2 = Vec2::new(-1.0, -1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn to_rgba8(self) -> [u8; 4] {
        match self {
            TextColor::Black => [0, 0, 0, 255],
            TextColor::White => [255, 255, 255, 255],
        }
    }
}

/// One string to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub position: Vec2,
    pub color: TextColor,
}

/// Draw list for one frame of the overlay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    items: Vec<TextItem>,
}

impl Overlay {
    /// Lay out instructions, menu labels, values and the cursor.
    pub fn build(fog: &FogParameters, cursor: &MenuCursor) -> Self {
        let mut overlay = Self::default();

        for (line, text) in INSTRUCTIONS.iter().enumerate() {
            let position = INSTRUCTION_ORIGIN + Vec2::new(0.0, line as f32 * INSTRUCTION_SPACING);
            overlay.push_shadowed(text, position);
        }

        for item in MenuItem::ALL {
            let y = row_y(item.index());
            overlay.push_shadowed(item.label(), Vec2::new(LABEL_X, y));
            overlay.push_shadowed(&fog.value_text(item), Vec2::new(VALUE_X, y));
        }

        overlay.push_shadowed(
            CURSOR_GLYPH,
            Vec2::new(CURSOR_X, row_y(cursor.selected_index())),
        );

        overlay
    }

    /// Items in draw order
    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    fn push_shadowed(&mut self, text: &str, position: Vec2) {
        self.items.push(TextItem {
            text: text.to_string(),
            position,
            color: TextColor::Black,
        });
        self.items.push(TextItem {
            text: text.to_string(),
            position: position + SHADOW_OFFSET,
            color: TextColor::White,
        });
    }
}

fn row_y(index: usize) -> f32 {
    MENU_TOP + index as f32 * MENU_ROW_HEIGHT
}
