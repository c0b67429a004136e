//! The claw state machine and its per-frame driver.

use crate::claw::events::{ClawEvent, ClawEventRecord};
use crate::claw::resolver::{PrizeDetector, PrizeResolver};
use crate::claw::sequencer::{ClampPhase, ReturnPhase, ReturnStep};
use crate::config::ClawConfig;
use crate::core::{ClawState, Direction, Guard, State, StateHistory, StateTransition, Vec3};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info};
use uuid::Uuid;

/// The scene object the claw drives. Its spawn X and Z seed the initial
/// position; Y always starts at the configured `start_y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClawBody {
    pub position: Vec3,
}

impl ClawBody {
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
        }
    }
}

/// What the claw is doing, with the progress of any timed phase.
///
/// The public [`ClawState`] is derived from this, so a phase can never be
/// active without its state and vice versa.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Activity {
    Idle,
    MovingHorizontal,
    Dropping,
    Clamping(ClampPhase),
    Returning(ReturnPhase),
}

impl Activity {
    fn state(&self) -> ClawState {
        match self {
            Activity::Idle => ClawState::Idle,
            Activity::MovingHorizontal => ClawState::MovingHorizontal,
            Activity::Dropping => ClawState::Dropping,
            Activity::Clamping(_) => ClawState::Clamping,
            Activity::Returning(_) => ClawState::Returning,
        }
    }
}

#[derive(Debug)]
struct CommandGuards {
    movement: Guard<ClawState>,
    stop: Guard<ClawState>,
    lower: Guard<ClawState>,
}

impl CommandGuards {
    fn new() -> Self {
        Self {
            movement: Guard::new(|s: &ClawState| s.accepts_input()),
            stop: Guard::one_of(&[ClawState::MovingHorizontal]),
            lower: Guard::one_of(&[ClawState::Idle]),
        }
    }
}

/// A single claw, driven by one host thread calling [`tick`](Self::tick)
/// once per frame.
///
/// Commands are fire-and-forget: a command that is not valid in the
/// current state is ignored. Once a drop starts, the only way back to
/// `Idle` is to run the sequence to completion.
///
/// # Example
///
/// ```rust
/// use claw_machine::builder::ClawMachineBuilder;
/// use claw_machine::claw::{ClawBody, FixedPrizeDetector};
/// use claw_machine::core::ClawState;
///
/// let mut claw = ClawMachineBuilder::new()
///     .claw_body(ClawBody::at(0.0, 0.0, 0.0))
///     .detector(FixedPrizeDetector(true))
///     .build()
///     .unwrap();
///
/// claw.lower_claw();
/// claw.tick(3.0);
/// assert_eq!(claw.state(), ClawState::Clamping);
/// assert_eq!(claw.position().y, -4.0);
/// ```
#[derive(Debug)]
pub struct ClawMachine {
    config: ClawConfig,
    activity: Activity,
    position: Vec3,
    initial_position: Vec3,
    direction: Direction,
    input_enabled: bool,
    resolver: PrizeResolver,
    guards: CommandGuards,
    history: StateHistory<ClawState>,
    events: VecDeque<ClawEventRecord>,
    round: u64,
    round_id: Option<Uuid>,
    clock: f64,
}

impl ClawMachine {
    /// Place the claw at its initial position. `config` must already be
    /// validated.
    pub(crate) fn new(
        config: ClawConfig,
        body: ClawBody,
        detector: Box<dyn PrizeDetector>,
    ) -> Self {
        let spawn_x = body.position.x.clamp(config.min_x, config.max_x);
        let initial_position = Vec3::new(spawn_x, config.start_y, body.position.z);
        debug!(
            x = initial_position.x,
            y = initial_position.y,
            z = initial_position.z,
            "claw placed at initial position"
        );

        Self {
            history: StateHistory::bounded(config.history_capacity),
            config,
            activity: Activity::Idle,
            position: initial_position,
            initial_position,
            direction: Direction::Right,
            input_enabled: true,
            resolver: PrizeResolver::new(detector),
            guards: CommandGuards::new(),
            events: VecDeque::new(),
            round: 0,
            round_id: None,
            clock: 0.0,
        }
    }

    // ---- commands ----

    /// Start or keep moving horizontally. Latest direction wins.
    pub fn move_claw(&mut self, direction: Direction) {
        let state = self.state();
        if !self.input_enabled || !self.guards.movement.check(&state) {
            debug!(state = %state, ?direction, "move ignored");
            return;
        }
        self.direction = direction;
        if state == ClawState::Idle {
            self.enter(Activity::MovingHorizontal);
        }
    }

    /// [`move_claw`](Self::move_claw) for hosts wired to an integer axis.
    /// Values other than -1 and 1 are ignored.
    pub fn move_raw(&mut self, axis: i32) {
        match Direction::try_from(axis) {
            Ok(direction) => self.move_claw(direction),
            Err(err) => debug!(%err, "move ignored"),
        }
    }

    pub fn stop_movement(&mut self) {
        let state = self.state();
        if !self.guards.stop.check(&state) {
            debug!(state = %state, "stop ignored");
            return;
        }
        self.enter(Activity::Idle);
    }

    /// Start a drop round. Input stays disabled until the claw is back.
    pub fn lower_claw(&mut self) {
        let state = self.state();
        if !self.input_enabled || !self.guards.lower.check(&state) {
            debug!(state = %state, "lower ignored");
            return;
        }
        self.round += 1;
        self.round_id = Some(Uuid::new_v4());
        self.input_enabled = false;
        info!(round = self.round, round_id = ?self.round_id, "claw lowering");
        self.enter(Activity::Dropping);
    }

    // ---- driver ----

    /// Advance the machine by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.tick_with_input(dt, None);
    }

    /// Advance by `dt` seconds, with `held` as the direction currently held
    /// on the input device. While moving, a held direction overrides the
    /// one recorded by the last [`move_claw`](Self::move_claw).
    ///
    /// Negative or non-finite deltas advance nothing.
    pub fn tick_with_input(&mut self, dt: f32, held: Option<Direction>) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.clock += f64::from(dt);

        match self.activity {
            Activity::Idle => {}
            Activity::MovingHorizontal => self.integrate_horizontal(dt, held),
            Activity::Dropping => self.integrate_drop(dt),
            Activity::Clamping(_) => self.advance_clamp(dt),
            Activity::Returning(_) => self.advance_return(dt),
        }
    }

    fn integrate_horizontal(&mut self, dt: f32, held: Option<Direction>) {
        if let Some(direction) = held {
            self.direction = direction;
        }
        let x = self.position.x + self.direction.sign() * self.config.move_speed * dt;
        self.position.x = x.clamp(self.config.min_x, self.config.max_x);
    }

    fn integrate_drop(&mut self, dt: f32) {
        let y = self.position.y - self.config.drop_speed * dt;
        if y > self.config.min_y {
            self.position.y = y;
            return;
        }
        self.position.y = self.config.min_y;
        let phase = ClampPhase::new(self.config.clamp_delay_seconds);
        self.enter(Activity::Clamping(phase));
    }

    fn advance_clamp(&mut self, dt: f32) {
        let Activity::Clamping(phase) = &mut self.activity else {
            return;
        };
        if phase.advance(dt) {
            self.resolve_clamp();
        }
    }

    fn resolve_clamp(&mut self) {
        let success = self.resolver.resolve(self.position);
        info!(round = self.round, success, "clamp resolved");
        self.emit(ClawEvent::ClampResolved { success });

        let phase = ReturnPhase::begin(
            self.position,
            self.initial_position,
            self.config.return_speed(),
        );
        let instant = phase.is_instant();
        self.enter(Activity::Returning(phase));
        if instant {
            self.complete_return();
        }
    }

    fn advance_return(&mut self, dt: f32) {
        let Activity::Returning(phase) = &mut self.activity else {
            return;
        };
        match phase.advance(dt) {
            ReturnStep::Moving(position) => self.position = position,
            ReturnStep::Arrived => self.complete_return(),
        }
    }

    fn complete_return(&mut self) {
        self.position = self.initial_position;
        if self.resolver.release() {
            info!(round = self.round, "prize released");
            self.emit(ClawEvent::PrizeReleased);
        }
        self.input_enabled = true;
        self.enter(Activity::Idle);
        info!(round = self.round, "sequence reset");
        self.emit(ClawEvent::SequenceReset);
    }

    fn enter(&mut self, next: Activity) {
        let from = self.activity.state();
        let to = next.state();
        debug_assert!(
            from.can_transition_to(to),
            "illegal claw transition {from} -> {to}"
        );

        self.activity = next;
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            sim_time: self.clock,
            round: self.round,
        });
        debug!(from = %from, to = %to, round = self.round, "claw state transition");
        self.emit(ClawEvent::StateChanged { from, to });
    }

    /// Queue an event, dropping the oldest once `event_capacity` is reached.
    fn emit(&mut self, event: ClawEvent) {
        self.events.push_back(ClawEventRecord {
            round: self.round,
            round_id: self.round_id,
            sim_time: self.clock,
            event,
        });
        while self.events.len() > self.config.event_capacity {
            self.events.pop_front();
        }
    }

    // ---- queries ----

    pub fn state(&self) -> ClawState {
        self.activity.state()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_clamped(&self) -> bool {
        self.resolver.is_clamped()
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Where a held prize should be drawn: it follows the claw while
    /// clamped.
    pub fn held_prize_position(&self) -> Option<Vec3> {
        self.is_clamped().then_some(self.position)
    }

    /// Number of drops started so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn round_id(&self) -> Option<Uuid> {
        self.round_id
    }

    /// Total tick time accumulated, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.clock
    }

    pub fn config(&self) -> &ClawConfig {
        &self.config
    }

    pub fn history(&self) -> &StateHistory<ClawState> {
        &self.history
    }

    /// Events queued since the last drain, oldest first. At most
    /// `event_capacity` are kept.
    pub fn events(&self) -> &VecDeque<ClawEventRecord> {
        &self.events
    }

    /// Take all queued events. Hosts call this once per frame.
    pub fn drain_events(&mut self) -> Vec<ClawEventRecord> {
        Vec::from(std::mem::take(&mut self.events))
    }
}
