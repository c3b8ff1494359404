//! Driving demo settings
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_RATE;
use crate::sim::{CarTuning, ObstacleLayout};

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting: {0}")]
    Invalid(&'static str),
}

/// Runtime settings for the driving demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RacerSettings {
    /// Track seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Simulation ticks per second
    pub tick_rate: u32,
    pub car: CarTuning,
    pub obstacles: ObstacleLayout,
}

impl Default for RacerSettings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate: TICK_RATE,
            car: CarTuning::default(),
            obstacles: ObstacleLayout::default(),
        }
    }
}

impl RacerSettings {
    /// Parse settings from JSON text and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_rate == 0 {
            return Err(SettingsError::Invalid("tick_rate must be positive"));
        }

        let car = &self.car;
        if car.max_speed <= 0.0 || car.acceleration <= 0.0 {
            return Err(SettingsError::Invalid(
                "car acceleration and max_speed must be positive",
            ));
        }
        if car.friction < 0.0 || car.turn_rate < 0.0 {
            return Err(SettingsError::Invalid(
                "car friction and turn_rate must not be negative",
            ));
        }
        if car.width <= 0.0 || car.height <= 0.0 {
            return Err(SettingsError::Invalid("car size must be positive"));
        }

        let obs = &self.obstacles;
        if obs.min_x > obs.max_x || obs.min_y > obs.max_y {
            return Err(SettingsError::Invalid("obstacle region is inverted"));
        }
        if obs.min_size <= 0 || obs.min_size > obs.max_size {
            return Err(SettingsError::Invalid("obstacle size range is invalid"));
        }

        Ok(())
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let s = RacerSettings::default();
        assert_eq!(s.tick_rate, 60);
        assert_eq!(s.obstacles.count, 5);
        assert_eq!(s.car.max_speed, 8.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = RacerSettings::from_json(r#"{ "seed": 7, "car": { "max_speed": 10.0 } }"#)
            .unwrap();
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.car.max_speed, 10.0);
        assert_eq!(s.car.acceleration, 0.1);
        assert_eq!(s.obstacles, ObstacleLayout::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = RacerSettings::from_json(r#"{ "tick_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err =
            RacerSettings::from_json(r#"{ "obstacles": { "min_x": 900, "max_x": 100 } }"#)
                .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = RacerSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "obstacles": {{ "count": 2 }} }}"#).unwrap();
        let s = RacerSettings::load(file.path()).unwrap();
        assert_eq!(s.obstacles.count, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RacerSettings::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = RacerSettings::default().to_json().unwrap();
        assert_eq!(RacerSettings::from_json(&json).unwrap(), RacerSettings::default());
    }
}
