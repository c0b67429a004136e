//! Validation rules for claw configuration.
//!
//! Every rule runs; failures are accumulated so a bad config document is
//! reported in one pass rather than one field at a time.

use crate::config::violations::ConfigViolation;
use crate::config::ClawConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub type ConfigCheck = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Largest history or event queue a machine may retain.
pub const MAX_RETAINED: usize = 1 << 16;

fn finite(field: &'static str, value: f32) -> ConfigCheck {
    if value.is_finite() {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> ConfigCheck {
    if !value.is_finite() {
        finite(field, value)
    } else if value > 0.0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> ConfigCheck {
    if !value.is_finite() {
        finite(field, value)
    } else if value >= 0.0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::Negative { field, value })
    }
}

fn ordered_bounds(config: &ClawConfig) -> ConfigCheck {
    // Comparisons against NaN are false, so non-finite bounds pass here and
    // are reported by `finite` instead.
    if config.min_x > config.max_x {
        Validation::fail(ConfigViolation::InvertedBounds {
            min_x: config.min_x,
            max_x: config.max_x,
        })
    } else {
        Validation::success(())
    }
}

fn start_above_floor(config: &ClawConfig) -> ConfigCheck {
    if config.start_y < config.min_y {
        Validation::fail(ConfigViolation::StartBelowFloor {
            start_y: config.start_y,
            min_y: config.min_y,
        })
    } else {
        Validation::success(())
    }
}

fn probability(value: f32) -> ConfigCheck {
    if (0.0..=1.0).contains(&value) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::ProbabilityOutOfRange(value))
    }
}

fn retained(field: &'static str, value: usize) -> ConfigCheck {
    if value <= MAX_RETAINED {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::CapacityTooLarge {
            field,
            value,
            max: MAX_RETAINED,
        })
    }
}

/// Run every rule against `config`, accumulating ALL violations.
pub fn validate(config: &ClawConfig) -> ConfigCheck {
    let checks = vec![
        positive("move_speed", config.move_speed),
        positive("drop_speed", config.drop_speed),
        positive("return_speed_multiplier", config.return_speed_multiplier),
        finite("min_x", config.min_x),
        finite("max_x", config.max_x),
        finite("min_y", config.min_y),
        finite("start_y", config.start_y),
        non_negative("clamp_delay_seconds", config.clamp_delay_seconds),
        ordered_bounds(config),
        start_above_floor(config),
        probability(config.clamp_success_probability),
        retained("history_capacity", config.history_capacity),
        retained("event_capacity", config.event_capacity),
    ];

    Validation::all_vec(checks).map(|_| ())
}
