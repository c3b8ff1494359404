//! Deterministic driving simulation
//!
//! All driving logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod car;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod track;

pub use car::{Car, CarTuning, DriveInput};
pub use collision::{Crash, check_collision, is_colliding};
pub use geometry::{Rect, point_in_polygon};
pub use state::{CrashReport, SessionState};
pub use tick::{TickInput, tick};
pub use track::{Obstacle, ObstacleLayout, Track};
