//! Builder API for claw machine construction.
//!
//! Construction is the only place that can fail: a missing claw body or an
//! invalid configuration is rejected here with every problem listed.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::ClawMachineBuilder;

use crate::claw::{ClawBody, ClawMachine};
use crate::config::ClawConfig;

/// Build a cabinet with the default configuration and a random prize check.
///
/// # Example
///
/// ```
/// use claw_machine::builder::standard_machine;
/// use claw_machine::claw::ClawBody;
///
/// let claw = standard_machine(ClawBody::at(0.0, 0.0, 0.0)).unwrap();
/// assert_eq!(claw.position().y, 5.0);
/// ```
pub fn standard_machine(body: ClawBody) -> Result<ClawMachine, BuildError> {
    configured_machine(ClawConfig::default(), body)
}

/// Build a cabinet from `config` with a random prize check.
pub fn configured_machine(config: ClawConfig, body: ClawBody) -> Result<ClawMachine, BuildError> {
    ClawMachineBuilder::new()
        .config(config)
        .claw_body(body)
        .build()
}
