//! Collision detection between the car and the track
//!
//! Two independent checks: the car's hitbox against every obstacle, then the
//! car's centre point against the boundary polygons.

use serde::{Deserialize, Serialize};

use super::car::Car;
use super::geometry::point_in_polygon;
use super::track::Track;

/// Why the car crashed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crash {
    /// Hitbox overlaps the obstacle at this index
    Obstacle { index: usize },
    /// Centre left the outer boundary
    OffTrack,
    /// Centre entered the infield (inside the inner boundary)
    Infield,
}

impl Crash {
    pub fn describe(&self) -> String {
        match self {
            Crash::Obstacle { index } => format!("hit obstacle {}", index),
            Crash::OffTrack => "left the track".to_string(),
            Crash::Infield => "cut into the infield".to_string(),
        }
    }
}

/// Check the car against the track, obstacles first
pub fn check_collision(car: &Car, track: &Track) -> Option<Crash> {
    let hitbox = car.hitbox();
    if let Some(index) = track
        .obstacles
        .iter()
        .position(|o| hitbox.intersects(&o.rect))
    {
        return Some(Crash::Obstacle { index });
    }

    if !point_in_polygon(car.pos, &track.outer) {
        return Some(Crash::OffTrack);
    }
    if point_in_polygon(car.pos, &track.inner) {
        return Some(Crash::Infield);
    }

    None
}

/// Whether the car is anywhere other than clear road
#[inline]
pub fn is_colliding(car: &Car, track: &Track) -> bool {
    check_collision(car, track).is_some()
}
