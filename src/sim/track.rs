//! Track layout: a ring between two boundary polygons plus scattered obstacles
//!
//! The drivable area is inside `outer` and outside `inner`. Both polygons and
//! the obstacle set are fixed once the track is built.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::car::CarTuning;
use super::geometry::Rect;
use crate::consts::*;

const OUTER_BOUNDARY: [(f32, f32); 10] = [
    (100.0, 100.0),
    (900.0, 100.0),
    (900.0, 600.0),
    (700.0, 600.0),
    (700.0, 400.0),
    (500.0, 400.0),
    (500.0, 600.0),
    (300.0, 600.0),
    (300.0, 400.0),
    (100.0, 400.0),
];

const INNER_BOUNDARY: [(f32, f32); 8] = [
    (200.0, 200.0),
    (800.0, 200.0),
    (800.0, 500.0),
    (600.0, 500.0),
    (600.0, 300.0),
    (400.0, 300.0),
    (400.0, 500.0),
    (200.0, 500.0),
];

/// A static axis-aligned block on the track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

/// Where and how large generated obstacles may be (integer pixels, inclusive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleLayout {
    pub count: usize,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    pub min_size: i32,
    pub max_size: i32,
}

impl Default for ObstacleLayout {
    fn default() -> Self {
        Self {
            count: OBSTACLE_COUNT,
            min_x: OBSTACLE_MIN_X,
            max_x: OBSTACLE_MAX_X,
            min_y: OBSTACLE_MIN_Y,
            max_y: OBSTACLE_MAX_Y,
            min_size: OBSTACLE_MIN_SIZE,
            max_size: OBSTACLE_MAX_SIZE,
        }
    }
}

impl ObstacleLayout {
    fn roll<R: Rng>(&self, rng: &mut R) -> Rect {
        let x = rng.random_range(self.min_x..=self.max_x);
        let y = rng.random_range(self.min_y..=self.max_y);
        let w = rng.random_range(self.min_size..=self.max_size);
        let h = rng.random_range(self.min_size..=self.max_size);
        Rect::new(x as f32, y as f32, w as f32, h as f32)
    }
}

/// Area around the start that must stay free of obstacles
///
/// Covers the car's envelope at any heading plus one tick of travel at top
/// speed, so the first tick after a (re)start can never hit an obstacle.
fn spawn_clearance(start: Vec2, car: &CarTuning) -> Rect {
    let side = car.width.hypot(car.height) + 2.0 * car.max_speed;
    Rect::from_center(start, side, side)
}

/// The race track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub outer: Vec<Vec2>,
    pub inner: Vec<Vec2>,
    pub obstacles: Vec<Obstacle>,
    /// Spawn point for the car (the window centre)
    pub start: Vec2,
}

impl Track {
    /// The standard circuit with no obstacles
    pub fn empty() -> Self {
        let to_vec = |pts: &[(f32, f32)]| -> Vec<Vec2> {
            pts.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
        };
        Self {
            outer: to_vec(&OUTER_BOUNDARY),
            inner: to_vec(&INNER_BOUNDARY),
            obstacles: Vec::new(),
            start: Vec2::new((WINDOW_WIDTH / 2) as f32, (WINDOW_HEIGHT / 2) as f32),
        }
    }

    /// The standard circuit with randomly placed obstacles
    ///
    /// Candidates that reach into the spawn clearance are re-rolled a bounded
    /// number of times; after that the obstacle is dropped.
    pub fn generate<R: Rng>(rng: &mut R, layout: &ObstacleLayout, car: &CarTuning) -> Self {
        let mut track = Self::empty();
        let spawn = spawn_clearance(track.start, car);

        for i in 0..layout.count {
            let placed = (0..OBSTACLE_PLACEMENT_ATTEMPTS)
                .map(|_| layout.roll(rng))
                .find(|rect| !rect.intersects(&spawn));

            match placed {
                Some(rect) => {
                    log::debug!(
                        "Obstacle {} at ({}, {}) size {}x{}",
                        i,
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height
                    );
                    track.obstacles.push(Obstacle { rect });
                }
                None => log::warn!("Obstacle {} skipped: no placement clear of the start", i),
            }
        }

        log::info!("Track built with {} obstacles", track.obstacles.len());
        track
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::point_in_polygon;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_start_is_in_drivable_ring() {
        let track = Track::empty();
        assert_eq!(track.start, Vec2::new(512.0, 384.0));
        assert!(point_in_polygon(track.start, &track.outer));
        assert!(!point_in_polygon(track.start, &track.inner));
    }

    #[test]
    fn test_generated_obstacles_within_layout() {
        let layout = ObstacleLayout::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let track = Track::generate(&mut rng, &layout, &CarTuning::default());
        assert_eq!(track.obstacles.len(), 5);
        for o in &track.obstacles {
            let r = o.rect;
            assert!((200.0..=800.0).contains(&r.x));
            assert!((200.0..=500.0).contains(&r.y));
            assert!((30.0..=60.0).contains(&r.width));
            assert!((30.0..=60.0).contains(&r.height));
            assert_eq!(r.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_obstacles_clear_of_spawn() {
        let layout = ObstacleLayout::default();
        let tuning = CarTuning::default();
        for seed in 0..200 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let track = Track::generate(&mut rng, &layout, &tuning);
            let spawn = spawn_clearance(track.start, &tuning);
            assert!(track.obstacles.iter().all(|o| !o.rect.intersects(&spawn)));
        }
    }

    #[test]
    fn test_same_seed_same_track() {
        let layout = ObstacleLayout::default();
        let tuning = CarTuning::default();
        let a = Track::generate(&mut Pcg32::seed_from_u64(42), &layout, &tuning);
        let b = Track::generate(&mut Pcg32::seed_from_u64(42), &layout, &tuning);
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_unplaceable_obstacles_are_dropped() {
        // Every candidate is pinned on top of the spawn point
        let layout = ObstacleLayout {
            count: 3,
            min_x: 500,
            max_x: 500,
            min_y: 380,
            max_y: 380,
            min_size: 30,
            max_size: 30,
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let track = Track::generate(&mut rng, &layout, &CarTuning::default());
        assert!(track.obstacles.is_empty());
    }

    #[test]
    fn test_obstacle_flush_with_car_is_rerolled() {
        // Touches the right edge of the unrotated body at the start
        let layout = ObstacleLayout {
            count: 1,
            min_x: 532,
            max_x: 532,
            min_y: 374,
            max_y: 374,
            min_size: 30,
            max_size: 30,
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let track = Track::generate(&mut rng, &layout, &CarTuning::default());
        assert!(track.obstacles.is_empty());
    }

    #[test]
    fn test_spawn_clearance_covers_any_heading() {
        let tuning = CarTuning::default();
        let clear = spawn_clearance(Vec2::new(512.0, 384.0), &tuning);
        // 40x20 body: diagonal ~44.7, plus 8 px of travel either way
        assert!(clear.width > 60.0 && clear.width < 61.0);
        assert_eq!(clear.width, clear.height);
        assert_eq!(clear.center(), Vec2::new(512.0, 384.0));
    }
}
