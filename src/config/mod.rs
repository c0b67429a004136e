//! Claw machine configuration.
//!
//! Configuration is supplied once at construction and never changes
//! afterwards. Documents may be partial: missing fields take the cabinet
//! defaults below.
//!
//! # Example
//!
//! ```rust
//! use claw_machine::config::ClawConfig;
//!
//! let config = ClawConfig::from_json(r#"{ "move_speed": 7.5, "min_x": -6.0 }"#).unwrap();
//! assert_eq!(config.move_speed, 7.5);
//! assert_eq!(config.max_x, 8.0);
//! assert_eq!(config.clamp_delay_seconds, 0.5);
//! ```

pub mod rules;
pub mod violations;

pub use rules::validate;
pub use violations::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Tuning values for one claw cabinet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClawConfig {
    /// Horizontal speed, units per second
    pub move_speed: f32,
    /// Vertical drop speed, units per second
    pub drop_speed: f32,
    /// Left rail limit
    pub min_x: f32,
    /// Right rail limit
    pub max_x: f32,
    /// Lowest point of the drop
    pub min_y: f32,
    /// Resting height of the claw
    pub start_y: f32,
    /// Time the claw stays closed at the bottom before returning
    pub clamp_delay_seconds: f32,
    /// Chance that a clamp picks up a prize
    pub clamp_success_probability: f32,
    /// Return speed as a multiple of `move_speed`
    pub return_speed_multiplier: f32,
    /// Maximum transitions kept in the machine's history
    pub history_capacity: usize,
    /// Maximum undrained events queued by the machine; the oldest are
    /// dropped first
    pub event_capacity: usize,
}

impl Default for ClawConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            drop_speed: 3.0,
            min_x: -8.0,
            max_x: 8.0,
            min_y: -4.0,
            start_y: 5.0,
            clamp_delay_seconds: 0.5,
            clamp_success_probability: 0.5,
            return_speed_multiplier: 2.0,
            history_capacity: 64,
            event_capacity: 256,
        }
    }
}

impl ClawConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ClawConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Validate, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        rules::validate(self)
    }

    /// Validate, collecting violations into a [`ConfigError::Invalid`].
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Speed used by the return phase.
    pub fn return_speed(&self) -> f32 {
        self.move_speed * self.return_speed_multiplier
    }
}
