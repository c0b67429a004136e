//! State transition history tracking.
//!
//! Provides immutable tracking of claw transitions over time. Each record
//! carries both the wall-clock time and the simulated clock the machine
//! accumulates from tick deltas, so a host can correlate the two.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use claw_machine::core::{ClawState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ClawState::Idle,
///     to: ClawState::Dropping,
///     timestamp: Utc::now(),
///     sim_time: 1.25,
///     round: 1,
/// };
/// assert_eq!(transition.round, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Wall-clock time of the transition
    pub timestamp: DateTime<Utc>,
    /// Accumulated tick time, in seconds, when the transition happened
    pub sim_time: f64,
    /// Drop round the transition belongs to (0 before the first drop)
    pub round: u64,
}

/// Ordered, optionally bounded history of state transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition added. With a capacity set, the oldest transitions are
/// discarded once the capacity is reached.
///
/// # Example
///
/// ```rust
/// use claw_machine::core::{ClawState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
/// let history = history.record(StateTransition {
///     from: ClawState::Idle,
///     to: ClawState::MovingHorizontal,
///     timestamp: Utc::now(),
///     sim_time: 0.0,
///     round: 0,
/// });
/// let history = history.record(StateTransition {
///     from: ClawState::MovingHorizontal,
///     to: ClawState::Idle,
///     timestamp: Utc::now(),
///     sim_time: 0.5,
///     round: 0,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Idle -> MovingHorizontal -> Idle
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    capacity: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create an empty history retaining at most `capacity` transitions.
    ///
    /// A capacity of zero records nothing. Storage grows as transitions are
    /// recorded, so a large capacity costs nothing up front.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push_back(transition);
        if let Some(capacity) = self.capacity {
            while transitions.len() > capacity {
                transitions.pop_front();
            }
        }
        Self {
            transitions,
            capacity: self.capacity,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition followed
    /// by the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Wall-clock duration from the oldest to the newest retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Transitions in the order they were recorded, oldest first.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClawState;

    fn transition(from: ClawState, to: ClawState, sim_time: f64) -> StateTransition<ClawState> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            sim_time,
            round: 1,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<ClawState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.capacity().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();

        let new_history = history.record(transition(ClawState::Idle, ClawState::Dropping, 0.0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(ClawState::Idle, ClawState::Dropping, 0.0))
            .record(transition(ClawState::Dropping, ClawState::Clamping, 3.0))
            .record(transition(ClawState::Clamping, ClawState::Returning, 3.5));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &ClawState::Idle,
                &ClawState::Dropping,
                &ClawState::Clamping,
                &ClawState::Returning
            ]
        );
    }

    #[test]
    fn bounded_history_discards_oldest() {
        let history = StateHistory::bounded(2)
            .record(transition(ClawState::Idle, ClawState::Dropping, 0.0))
            .record(transition(ClawState::Dropping, ClawState::Clamping, 1.0))
            .record(transition(ClawState::Clamping, ClawState::Returning, 1.5));

        assert_eq!(history.len(), 2);
        let path = history.get_path();
        assert_eq!(path[0], &ClawState::Dropping);
        assert_eq!(history.last().map(|t| t.to), Some(ClawState::Returning));
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let history = StateHistory::bounded(0)
            .record(transition(ClawState::Idle, ClawState::MovingHorizontal, 0.0));
        assert!(history.is_empty());
    }

    #[test]
    fn huge_capacity_does_not_preallocate() {
        let history = StateHistory::bounded(usize::MAX)
            .record(transition(ClawState::Idle, ClawState::Dropping, 0.0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.capacity(), Some(usize::MAX));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                timestamp: start,
                ..transition(ClawState::Idle, ClawState::Dropping, 0.0)
            })
            .record(StateTransition {
                timestamp: start + chrono::Duration::milliseconds(250),
                ..transition(ClawState::Dropping, ClawState::Clamping, 0.25)
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::bounded(8)
            .record(transition(ClawState::Idle, ClawState::MovingHorizontal, 0.0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<ClawState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), deserialized.len());
        assert_eq!(deserialized.capacity(), Some(8));
    }
}
