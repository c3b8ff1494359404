//! Vehicle kinematics
//!
//! A car is a point with a heading and a signed scalar speed. Each tick the
//! held controls adjust heading and speed, the car moves along its heading,
//! then friction bleeds speed toward zero.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;
use crate::{heading_vector, rotate_local};

/// Controls held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Fixed handling constants for a car
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarTuning {
    /// Speed gained per tick of throttle
    pub acceleration: f32,
    /// Forward speed cap (reverse cap is half of this)
    pub max_speed: f32,
    /// Degrees of heading change per tick of steering
    pub turn_rate: f32,
    /// Speed lost per tick regardless of input
    pub friction: f32,
    /// Body length along the heading
    pub width: f32,
    /// Body breadth across the heading
    pub height: f32,
}

impl Default for CarTuning {
    fn default() -> Self {
        Self {
            acceleration: CAR_ACCELERATION,
            max_speed: CAR_MAX_SPEED,
            turn_rate: CAR_TURN_RATE,
            friction: CAR_FRICTION,
            width: CAR_WIDTH,
            height: CAR_HEIGHT,
        }
    }
}

impl CarTuning {
    #[inline]
    pub fn max_reverse_speed(&self) -> f32 {
        self.max_speed / 2.0
    }
}

/// The player's car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub pos: Vec2,
    /// Degrees, 0 = +x, counter-clockwise on screen. Never wrapped.
    pub heading: f32,
    /// Positive is forward
    pub speed: f32,
    pub tuning: CarTuning,
}

impl Car {
    /// A stationary car facing +x
    pub fn new(pos: Vec2, tuning: CarTuning) -> Self {
        Self {
            pos,
            heading: 0.0,
            speed: 0.0,
            tuning,
        }
    }

    /// Put the car back at `pos`, stopped and facing +x
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.heading = 0.0;
        self.speed = 0.0;
    }

    /// Advance one tick
    pub fn step(&mut self, input: &DriveInput) {
        let t = self.tuning;

        if input.left {
            self.heading += t.turn_rate;
        }
        if input.right {
            self.heading -= t.turn_rate;
        }

        if input.forward {
            self.speed = (self.speed + t.acceleration).min(t.max_speed);
        }
        if input.backward {
            self.speed = (self.speed - t.acceleration).max(-t.max_reverse_speed());
        }

        self.pos += heading_vector(self.heading) * self.speed;

        if self.speed > 0.0 {
            self.speed = (self.speed - t.friction).max(0.0);
        } else if self.speed < 0.0 {
            self.speed = (self.speed + t.friction).min(0.0);
        }
    }

    /// Body corners in screen space (front-left, front-right, rear-right, rear-left)
    pub fn corners(&self) -> [Vec2; 4] {
        let hw = self.tuning.width / 2.0;
        let hh = self.tuning.height / 2.0;
        [
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
            Vec2::new(-hw, -hh),
        ]
        .map(|local| self.pos + rotate_local(local, self.heading))
    }

    /// Axis-aligned envelope of the rotated body, centred on the car
    ///
    /// Coarser than an oriented box: at 45 degrees the envelope is noticeably
    /// larger than the body itself.
    pub fn hitbox(&self) -> Rect {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let w = self.tuning.width * cos + self.tuning.height * sin;
        let h = self.tuning.width * sin + self.tuning.height * cos;
        Rect::from_center(self.pos, w, h)
    }
}
