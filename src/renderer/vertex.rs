//! Vertex types for 2D rendering

use glam::Vec2;

/// Simple 2D vertex with position and color
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TRACK_EDGE: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const CAR_BODY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const CAR_WINDOW: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const CAR_WHEEL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
