//! Driving session state
//!
//! Everything the session loop mutates lives here, so two states built from
//! the same seed and settings evolve identically under the same inputs.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::car::Car;
use super::collision::Crash;
use super::track::Track;
use crate::settings::RacerSettings;

/// Reported by `tick` when the car crashed and was put back on the start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrashReport {
    pub cause: Crash,
    /// Length of the run that just ended
    pub run_ticks: u64,
    /// The run set a new best time
    pub new_best: bool,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Seed the track was generated from
    pub seed: u64,
    /// Ticks per simulated second
    pub tick_rate: u32,
    pub car: Car,
    pub track: Track,
    /// Ticks since the session began
    pub time_ticks: u64,
    /// Ticks since the last (re)start
    pub run_ticks: u64,
    /// Shortest completed run, if any
    pub best_ticks: Option<u64>,
    /// Number of crashes so far
    pub crashes: u32,
}

impl SessionState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, settings: &RacerSettings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let track = Track::generate(&mut rng, &settings.obstacles, &settings.car);
        Self::with_track(seed, track, settings)
    }

    /// Create a session on a prebuilt track
    pub fn with_track(seed: u64, track: Track, settings: &RacerSettings) -> Self {
        let car = Car::new(track.start, settings.car);
        Self {
            seed,
            tick_rate: settings.tick_rate,
            car,
            track,
            time_ticks: 0,
            run_ticks: 0,
            best_ticks: None,
            crashes: 0,
        }
    }

    /// Put the car back on the start and restart the run clock
    ///
    /// Returns true when the finished run beats the stored best.
    pub fn restart(&mut self) -> bool {
        let finished = self.run_ticks;
        let new_best = self.best_ticks.is_none_or(|best| finished < best);
        if new_best {
            self.best_ticks = Some(finished);
        }

        self.car.reset(self.track.start);
        self.run_ticks = 0;
        new_best
    }

    fn ticks_to_secs(&self, ticks: u64) -> f32 {
        ticks as f32 / self.tick_rate.max(1) as f32
    }

    /// Current run time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.ticks_to_secs(self.run_ticks)
    }

    /// Best run time in seconds
    pub fn best_secs(&self) -> Option<f32> {
        self.best_ticks.map(|t| self.ticks_to_secs(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_session_starts_at_track_centre() {
        let state = SessionState::new(12345, &RacerSettings::default());
        assert_eq!(state.car.pos, Vec2::new(512.0, 384.0));
        assert_eq!(state.car.speed, 0.0);
        assert_eq!(state.car.heading, 0.0);
        assert_eq!(state.best_ticks, None);
        assert_eq!(state.track.obstacles.len(), 5);
    }

    #[test]
    fn test_restart_keeps_shortest_run() {
        let mut state = SessionState::with_track(1, Track::empty(), &RacerSettings::default());

        state.run_ticks = 120;
        assert!(state.restart());
        assert_eq!(state.best_ticks, Some(120));
        assert_eq!(state.run_ticks, 0);

        state.run_ticks = 300;
        assert!(!state.restart());
        assert_eq!(state.best_ticks, Some(120));

        state.run_ticks = 90;
        assert!(state.restart());
        assert_eq!(state.best_secs(), Some(1.5));
    }

    #[test]
    fn test_elapsed_secs() {
        let mut state = SessionState::with_track(1, Track::empty(), &RacerSettings::default());
        state.run_ticks = 150;
        assert_eq!(state.elapsed_secs(), 2.5);
    }
}
