//! The tick-driven claw machine.
//!
//! This is the "imperative shell" around the pure core: the machine owns
//! position, timing, randomness and the event queue, and is advanced by a
//! single host thread calling [`ClawMachine::tick`] once per frame.
//!
//! # Key Concepts
//!
//! - **Commands**: `move_claw`, `stop_movement`, `lower_claw`, gated by guards
//! - **Motion**: per-tick horizontal and drop integration, clamped to the cabinet
//! - **Phases**: clamp delay and return interpolation as explicit progress structs
//! - **Resolver**: a [`PrizeDetector`] decides each clamp; events report the outcome

mod events;
mod machine;
mod resolver;
mod sequencer;

pub use events::{ClawEvent, ClawEventRecord};
pub use machine::{ClawBody, ClawMachine};
pub use resolver::{FixedPrizeDetector, PrizeDetector, RandomPrizeDetector};
pub use sequencer::{ClampPhase, ReturnPhase, ReturnStep, INSTANT_DURATION};
