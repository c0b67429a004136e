//! Claw states and the legal transition table.
//!
//! Every state of the claw implements [`State`], which exposes pure
//! queries the command layer and the tick driver use to decide what a
//! state permits.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Trait for claw machine states.
///
/// All methods are pure - no side effects. A state only describes where
/// the claw is in its cycle; motion and timing live in the machine.
///
/// # Example
///
/// ```rust
/// use claw_machine::core::{ClawState, State};
///
/// assert_eq!(ClawState::Dropping.name(), "Dropping");
/// assert!(ClawState::Idle.accepts_input());
/// assert!(ClawState::Returning.is_sequence());
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Whether player commands may change this state.
    ///
    /// Default implementation returns `true`.
    fn accepts_input(&self) -> bool {
        true
    }

    /// Whether this state is part of the timed drop sequence, which can
    /// only be left by running it to completion.
    ///
    /// Default implementation returns `false`.
    fn is_sequence(&self) -> bool {
        false
    }
}

/// The five states of the claw. Exactly one is active at a time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum ClawState {
    /// Waiting for a command at rest.
    #[default]
    Idle,
    /// Travelling along X under player control.
    MovingHorizontal,
    /// Descending toward the floor of the cabinet.
    Dropping,
    /// Closed at the bottom, waiting out the clamp delay.
    Clamping,
    /// Travelling back to the initial position.
    Returning,
}

impl ClawState {
    /// All states, in cycle order.
    pub const ALL: [ClawState; 5] = [
        ClawState::Idle,
        ClawState::MovingHorizontal,
        ClawState::Dropping,
        ClawState::Clamping,
        ClawState::Returning,
    ];

    /// Check whether `self -> to` is an edge of the claw's state graph.
    ///
    /// Only `Idle <-> MovingHorizontal` is bidirectional; the drop
    /// sequence runs one way back to `Idle`.
    ///
    /// ```rust
    /// use claw_machine::core::ClawState;
    ///
    /// assert!(ClawState::Idle.can_transition_to(ClawState::Dropping));
    /// assert!(!ClawState::MovingHorizontal.can_transition_to(ClawState::Dropping));
    /// assert!(!ClawState::Returning.can_transition_to(ClawState::Clamping));
    /// ```
    pub fn can_transition_to(self, to: ClawState) -> bool {
        use ClawState::*;
        matches!(
            (self, to),
            (Idle, MovingHorizontal)
                | (MovingHorizontal, Idle)
                | (Idle, Dropping)
                | (Dropping, Clamping)
                | (Clamping, Returning)
                | (Returning, Idle)
        )
    }
}

impl State for ClawState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::MovingHorizontal => "MovingHorizontal",
            Self::Dropping => "Dropping",
            Self::Clamping => "Clamping",
            Self::Returning => "Returning",
        }
    }

    fn accepts_input(&self) -> bool {
        matches!(self, Self::Idle | Self::MovingHorizontal)
    }

    fn is_sequence(&self) -> bool {
        matches!(self, Self::Dropping | Self::Clamping | Self::Returning)
    }
}

impl Display for ClawState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
