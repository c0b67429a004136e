//! Observability events emitted by the claw machine.
//!
//! Events are queued on the machine and drained by the host each frame;
//! audio, UI and logging collaborators consume them. They are never read
//! back by the machine itself.

use crate::core::ClawState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Something observable happened during a tick or a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClawEvent {
    /// The claw moved along an edge of its state graph.
    StateChanged { from: ClawState, to: ClawState },

    /// The clamp delay elapsed and the prize check ran.
    ClampResolved { success: bool },

    /// A held prize was let go at the end of the return trip.
    PrizeReleased,

    /// The drop sequence finished; the claw is idle with input enabled.
    SequenceReset,
}

/// An event together with when and in which round it happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClawEventRecord {
    /// Drop round counter, 0 before the first drop
    pub round: u64,
    /// Identifier of the current drop round, if one has started
    pub round_id: Option<Uuid>,
    /// Accumulated tick time, in seconds
    pub sim_time: f64,
    pub event: ClawEvent,
}
