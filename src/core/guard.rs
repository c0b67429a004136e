//! Guard predicates for gating player commands.
//!
//! Guards are pure boolean functions over a state. The command layer holds
//! one guard per command and silently ignores a command whose guard fails.

use super::state::State;
use std::marker::PhantomData;

/// A pure predicate deciding whether something is allowed from a state.
///
/// # Example
///
/// ```rust
/// use claw_machine::core::{ClawState, Guard};
///
/// let can_lower = Guard::new(|s: &ClawState| *s == ClawState::Idle);
///
/// assert!(can_lower.check(&ClawState::Idle));
/// assert!(!can_lower.check(&ClawState::MovingHorizontal));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that passes only for states equal to one of `allowed`.
    pub fn one_of(allowed: &[S]) -> Self
    where
        S: 'static,
    {
        let allowed = allowed.to_vec();
        Self::new(move |state| allowed.contains(state))
    }

    /// Check if the guard allows the action from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
