//! Session settings
//!
//! Read once at construction. Every key is optional; missing keys take the
//! defaults in [`crate::consts`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Simulation session parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Number of balls spawned at startup
    pub particle_count: usize,

    // === Arena ===
    pub width: f64,
    pub height: f64,

    // === Timing ===
    /// Scheduler rate; one tick is one unit of simulated time
    pub ticks_per_second: u32,

    // === Spawn ranges ===
    pub min_size: f64,
    pub max_size: f64,
    pub min_speed: f64,
    pub max_speed: f64,

    /// Seed for placement and colors (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_BALL_COUNT,

            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            ticks_per_second: DEFAULT_TICKS_PER_SECOND,

            min_size: MIN_BALL_SIZE,
            max_size: MAX_BALL_SIZE,
            min_speed: MIN_BALL_SPEED,
            max_speed: MAX_BALL_SPEED,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Interval between scheduled ticks
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.ticks_per_second.max(1)))
    }

    /// Check every constraint the arena and placement rely on
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(Error::Configuration(format!(
                    "{name} must be finite and > 0 (got {v})"
                )))
            }
        };
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("minSize", self.min_size)?;
        positive("maxSize", self.max_size)?;

        if !self.min_speed.is_finite() || self.min_speed < 0.0 || !self.max_speed.is_finite() {
            return Err(Error::Configuration(
                "speed range must be finite and non-negative".into(),
            ));
        }
        if self.min_size > self.max_size {
            return Err(Error::Configuration(format!(
                "minSize {} exceeds maxSize {}",
                self.min_size, self.max_size
            )));
        }
        if self.min_speed > self.max_speed {
            return Err(Error::Configuration(format!(
                "minSpeed {} exceeds maxSpeed {}",
                self.min_speed, self.max_speed
            )));
        }
        if self.ticks_per_second == 0 {
            return Err(Error::Configuration("ticksPerSecond must be > 0".into()));
        }
        if self.tick_period().is_zero() {
            return Err(Error::Configuration(format!(
                "ticksPerSecond {} is too high: tick period rounds to zero",
                self.ticks_per_second
            )));
        }
        // Spawn positions are inset by maxSize on every side
        if self.width <= 2.0 * self.max_size || self.height <= 2.0 * self.max_size {
            return Err(Error::Configuration(format!(
                "arena {}x{} is too small for balls up to radius {}",
                self.width, self.height, self.max_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.particle_count, 2);
        assert_eq!((s.width, s.height), (800.0, 600.0));
        assert_eq!(s.ticks_per_second, 60);
        assert_eq!((s.min_size, s.max_size), (5.0, 15.0));
        assert_eq!((s.min_speed, s.max_speed), (1.0, 2.0));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json_str(r#"{ "particleCount": 50, "seed": 7 }"#).unwrap();
        assert_eq!(s.particle_count, 50);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.width, 800.0);
        assert_eq!(s.max_speed, 2.0);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let err = Settings::from_json_str(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let s = Settings {
            height: -10.0,
            ..Default::default()
        };
        assert!(matches!(s.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let s = Settings {
            min_size: 20.0,
            max_size: 10.0,
            ..Default::default()
        };
        assert!(s.validate().is_err());

        let s = Settings {
            min_speed: 3.0,
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_rejects_arena_smaller_than_spawn_inset() {
        let s = Settings {
            width: 30.0,
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json_str("{ width: }").unwrap_err();
        assert!(matches!(err, Error::Settings(_)));
    }

    #[test]
    fn test_rejects_rate_with_zero_period() {
        let s = Settings {
            ticks_per_second: u32::MAX,
            ..Default::default()
        };
        assert!(s.tick_period().is_zero());
        assert!(matches!(s.validate(), Err(Error::Configuration(_))));

        // One tick per nanosecond is the fastest representable rate
        let s = Settings {
            ticks_per_second: 1_000_000_000,
            ..Default::default()
        };
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_tick_period() {
        let s = Settings::default();
        let period = s.tick_period();
        assert!((period.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }
}
