//! Arcade Toys - two small games sharing one crate
//!
//! Core modules:
//! - `sim`: Deterministic driving simulation (kinematics, track, collisions)
//! - `renderer`: Frame building for the driving demo (triangles + HUD text)
//! - `platform`: Native window, input and frame pacing (macroquad)
//! - `settings`: Runtime configuration for the driving demo
//! - `rps`: Best-of-N rock-paper-scissors match engine

pub mod platform;
pub mod renderer;
pub mod rps;
pub mod settings;
pub mod sim;

pub use settings::{RacerSettings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: u32 = 1024;
    pub const WINDOW_HEIGHT: u32 = 768;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Car defaults
    pub const CAR_ACCELERATION: f32 = 0.1;
    pub const CAR_MAX_SPEED: f32 = 8.0;
    /// Degrees per tick
    pub const CAR_TURN_RATE: f32 = 3.0;
    pub const CAR_FRICTION: f32 = 0.02;
    pub const CAR_WIDTH: f32 = 40.0;
    pub const CAR_HEIGHT: f32 = 20.0;

    /// Obstacle generation
    pub const OBSTACLE_COUNT: usize = 5;
    pub const OBSTACLE_MIN_X: i32 = 200;
    pub const OBSTACLE_MAX_X: i32 = 800;
    pub const OBSTACLE_MIN_Y: i32 = 200;
    pub const OBSTACLE_MAX_Y: i32 = 500;
    pub const OBSTACLE_MIN_SIZE: i32 = 30;
    pub const OBSTACLE_MAX_SIZE: i32 = 60;
    /// Re-rolls allowed per obstacle when a candidate covers the start pose
    pub const OBSTACLE_PLACEMENT_ATTEMPTS: u32 = 32;
}

/// Unit vector for a heading in degrees (screen space, +y down)
///
/// Heading 0 faces +x and grows counter-clockwise as seen on screen,
/// so the y component is negated.
#[inline]
pub fn heading_vector(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// Rotate a point from car-local space (x forward, y down) into screen space
#[inline]
pub fn rotate_local(local: Vec2, heading_deg: f32) -> Vec2 {
    let (sin, cos) = heading_deg.to_radians().sin_cos();
    Vec2::new(local.x * cos + local.y * sin, -local.x * sin + local.y * cos)
}
