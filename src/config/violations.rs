//! Configuration violations and load errors.

use thiserror::Error;

/// A single problem found while validating a [`ClawConfig`](super::ClawConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("min_x ({min_x}) must not exceed max_x ({max_x})")]
    InvertedBounds { min_x: f32, max_x: f32 },

    #[error("start_y ({start_y}) must not be below min_y ({min_y})")]
    StartBelowFloor { start_y: f32, min_y: f32 },

    #[error("clamp_success_probability must be within [0, 1] (got {0})")]
    ProbabilityOutOfRange(f32),

    #[error("{field} must not exceed {max} (got {value})")]
    CapacityTooLarge {
        field: &'static str,
        value: usize,
        max: usize,
    },
}

/// Errors that can occur when loading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse claw configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid claw configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

pub(crate) fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
