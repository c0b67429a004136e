//! Builder for constructing claw machines.

use crate::builder::error::BuildError;
use crate::claw::{ClawBody, ClawMachine, PrizeDetector, RandomPrizeDetector};
use crate::config::ClawConfig;
use stillwater::validation::Validation;

/// Builder for constructing a claw machine with a fluent API.
///
/// Everything is checked in [`build`](Self::build), so a misconfigured
/// cabinet fails at setup instead of on its first tick.
pub struct ClawMachineBuilder {
    config: ClawConfig,
    body: Option<ClawBody>,
    detector: Option<Box<dyn PrizeDetector>>,
}

impl ClawMachineBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ClawConfig::default(),
            body: None,
            detector: None,
        }
    }

    /// Replace the configuration.
    pub fn config(mut self, config: ClawConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the claw body to drive (required).
    pub fn claw_body(mut self, body: ClawBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the prize detector. Defaults to a [`RandomPrizeDetector`] using
    /// the configured success probability.
    pub fn detector<D>(mut self, detector: D) -> Self
    where
        D: PrizeDetector + 'static,
    {
        self.detector = Some(Box::new(detector));
        self
    }

    /// Build the claw machine.
    /// Returns an error if the body is missing or the configuration is invalid.
    pub fn build(self) -> Result<ClawMachine, BuildError> {
        let body = self.body.ok_or(BuildError::MissingClawBody)?;

        let position = body.position;
        if !position.is_finite() {
            return Err(BuildError::NonFiniteClawBody {
                x: position.x,
                y: position.y,
                z: position.z,
            });
        }

        if let Validation::Failure(violations) = self.config.validate() {
            return Err(BuildError::InvalidConfig(
                violations.iter().cloned().collect(),
            ));
        }

        let detector = match self.detector {
            Some(detector) => detector,
            None => Box::new(RandomPrizeDetector::from_entropy(
                self.config.clamp_success_probability,
            )),
        };

        Ok(ClawMachine::new(self.config, body, detector))
    }
}

impl Default for ClawMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claw::FixedPrizeDetector;
    use crate::config::ConfigViolation;
    use crate::core::{ClawState, Vec3};

    #[test]
    fn builder_requires_claw_body() {
        let result = ClawMachineBuilder::new().build();
        assert!(matches!(result, Err(BuildError::MissingClawBody)));
    }

    #[test]
    fn builder_rejects_non_finite_body() {
        let result = ClawMachineBuilder::new()
            .claw_body(ClawBody::at(f32::NAN, 0.0, 0.0))
            .build();
        assert!(matches!(result, Err(BuildError::NonFiniteClawBody { .. })));
    }

    #[test]
    fn builder_reports_every_config_violation() {
        let config = ClawConfig {
            move_speed: 0.0,
            clamp_success_probability: -0.5,
            ..ClawConfig::default()
        };

        let err = ClawMachineBuilder::new()
            .config(config)
            .claw_body(ClawBody::at(0.0, 0.0, 0.0))
            .build()
            .unwrap_err();

        match err {
            BuildError::InvalidConfig(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&ConfigViolation::ProbabilityOutOfRange(-0.5)));
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn oversized_history_fails_build_instead_of_allocating() {
        let config = ClawConfig {
            history_capacity: usize::MAX,
            ..ClawConfig::default()
        };

        let err = ClawMachineBuilder::new()
            .config(config)
            .claw_body(ClawBody::at(0.0, 0.0, 0.0))
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::InvalidConfig(ref violations)
                if matches!(
                    violations.as_slice(),
                    [ConfigViolation::CapacityTooLarge { field: "history_capacity", .. }]
                )
        ));
        assert!(err.to_string().contains("history_capacity"));
    }

    #[test]
    fn missing_body_reported_before_config() {
        let config = ClawConfig {
            drop_speed: -3.0,
            ..ClawConfig::default()
        };
        let result = ClawMachineBuilder::new().config(config).build();
        assert!(matches!(result, Err(BuildError::MissingClawBody)));
    }

    #[test]
    fn builder_creates_idle_machine() {
        let machine = ClawMachineBuilder::new()
            .claw_body(ClawBody::at(-2.0, 1.0, 0.5))
            .detector(FixedPrizeDetector(false))
            .build()
            .unwrap();

        assert_eq!(machine.state(), ClawState::Idle);
        assert_eq!(machine.initial_position(), Vec3::new(-2.0, 5.0, 0.5));
        assert_eq!(machine.config(), &ClawConfig::default());
    }

    #[test]
    fn error_message_names_the_problem() {
        let err = ClawMachineBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains("claw_body"));
    }
}
