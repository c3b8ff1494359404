//! Platform abstraction layer
//!
//! Handles the native window through macroquad:
//! - Time/ticks (`time`, pure and window-free)
//! - Input events (`input`)
//! - Drawing built frames (`draw`)

pub mod draw;
pub mod input;
pub mod time;

pub use draw::draw_frame;
pub use input::{KeyState, capture_quit, quit_requested};
pub use time::FixedStep;
