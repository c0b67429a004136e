//! Core claw types and logic.
//!
//! This module contains the pure building blocks of the claw machine:
//! - State definitions via the `State` trait and the `ClawState` graph
//! - Guard predicates for command gating
//! - Immutable, bounded history tracking
//! - Vector and direction math used by the motion integrator
//!
//! Nothing in this module touches the clock, randomness or logging.

mod guard;
mod history;
mod state;
mod vector;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{ClawState, State};
pub use vector::{Direction, InvalidDirection, Vec3};
