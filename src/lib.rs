//! Claw Machine: a tick-driven claw state machine for 2D arcade cabinets
//!
//! The crate follows a "pure core, imperative shell" split. The core state
//! logic (states, guards, history, vector math) is made of pure functions,
//! while the machine that owns position, timing and randomness is advanced
//! by a host calling `tick` once per frame.
//!
//! # Core Concepts
//!
//! - **State**: `ClawState` with its one-way drop sequence
//! - **Commands**: move, stop and lower, silently ignored when not allowed
//! - **Phases**: clamp delay and return trip tracked as progress, never blocking
//! - **Events**: clamp results, releases and resets queued for the host
//!
//! # Example
//!
//! ```rust
//! use claw_machine::builder::ClawMachineBuilder;
//! use claw_machine::claw::{ClawBody, FixedPrizeDetector};
//! use claw_machine::core::{ClawState, Direction};
//!
//! let mut claw = ClawMachineBuilder::new()
//!     .claw_body(ClawBody::at(0.0, 0.0, 0.0))
//!     .detector(FixedPrizeDetector(true))
//!     .build()
//!     .unwrap();
//!
//! claw.move_claw(Direction::Right);
//! claw.tick(0.5);
//! claw.stop_movement();
//! claw.lower_claw();
//!
//! while claw.state() != ClawState::Idle {
//!     claw.tick(1.0 / 60.0);
//! }
//! assert_eq!(claw.position(), claw.initial_position());
//! assert!(claw.input_enabled());
//! ```

pub mod builder;
pub mod claw;
pub mod config;
pub mod core;
pub mod scatter;

// Re-export commonly used types
pub use builder::{BuildError, ClawMachineBuilder};
pub use claw::{ClawEvent, ClawMachine, PrizeDetector};
pub use config::ClawConfig;
pub use self::core::{ClawState, Direction, State, Vec3};
