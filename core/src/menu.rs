//! Six-row fog menu and its selection cursor

/// One editable row of the fog menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Enabled,
    Red,
    Green,
    Blue,
    Start,
    End,
}

impl MenuItem {
    /// Number of menu rows
    pub const COUNT: usize = 6;

    /// All rows in display order
    pub const ALL: [MenuItem; Self::COUNT] = [
        MenuItem::Enabled,
        MenuItem::Red,
        MenuItem::Green,
        MenuItem::Blue,
        MenuItem::Start,
        MenuItem::End,
    ];

    /// Label drawn in the overlay
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Enabled => "Enabled",
            MenuItem::Red => "Color (Red)",
            MenuItem::Green => "Color (Green)",
            MenuItem::Blue => "Color (Blue)",
            MenuItem::Start => "Start",
            MenuItem::End => "End",
        }
    }

    /// Row index of this item
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Selection cursor over the menu rows. Always points at exactly one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuCursor {
    selected_index: usize,
}

impl MenuCursor {
    /// Create a cursor on the given row, wrapping out-of-range indices.
    pub fn at(index: usize) -> Self {
        Self {
            selected_index: index % MenuItem::COUNT,
        }
    }

    /// Index of the selected row, in [0, 5]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The selected row
    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected_index]
    }

    /// Select the previous row, wrapping from the first to the last.
    pub fn move_up(&mut self) {
        self.selected_index = (self.selected_index + MenuItem::COUNT - 1) % MenuItem::COUNT;
    }

    /// Select the next row, wrapping from the last to the first.
    pub fn move_down(&mut self) {
        self.selected_index = (self.selected_index + 1) % MenuItem::COUNT;
    }
}
