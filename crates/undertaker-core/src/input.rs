//! Level-triggered input polled once per tick.

use std::collections::BTreeSet;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::InputAction;

/// Source of input for a single tick.
pub trait InputSource {
    /// Whether `action` is held this tick.
    fn is_active(&self, action: InputAction) -> bool;

    /// Cursor position in screen pixels, origin at the bottom-left.
    fn cursor_screen_position(&self) -> DVec2;
}

/// Plain input snapshot: the set of held actions plus the cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub held: BTreeSet<InputAction>,
    pub cursor: DVec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: mark `action` as held.
    pub fn with(mut self, action: InputAction) -> Self {
        self.held.insert(action);
        self
    }

    pub fn with_cursor(mut self, cursor: DVec2) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn set(&mut self, action: InputAction, active: bool) {
        if active {
            self.held.insert(action);
        } else {
            self.held.remove(&action);
        }
    }
}

impl InputSource for InputState {
    fn is_active(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    fn cursor_screen_position(&self) -> DVec2 {
        self.cursor
    }
}
