//! Keyboard sampling
//!
//! Arrow keys drive the car; closing the window ends the session.

use macroquad::prelude::{KeyCode, is_key_down, is_quit_requested, prevent_quit};

use crate::sim::{DriveInput, TickInput};

/// Snapshot of the keys the demo cares about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    /// Read the arrow keys from the window
    pub fn sample() -> Self {
        Self {
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
        }
    }

    pub fn to_tick_input(self) -> TickInput {
        TickInput {
            drive: DriveInput {
                forward: self.up,
                backward: self.down,
                left: self.left,
                right: self.right,
            },
        }
    }
}

/// Route window-close through `quit_requested` instead of exiting outright
pub fn capture_quit() {
    prevent_quit();
}

/// The user asked to close the window
pub fn quit_requested() -> bool {
    is_quit_requested()
}
