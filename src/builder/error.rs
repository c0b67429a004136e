//! Build errors for claw machine construction.

use crate::config::violations::format_violations;
use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a claw machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Claw body not specified. Call .claw_body(body) before .build()")]
    MissingClawBody,

    #[error("Claw body position ({x}, {y}, {z}) is not finite")]
    NonFiniteClawBody { x: f32, y: f32, z: f32 },

    #[error("Invalid claw configuration: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}
