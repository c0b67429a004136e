//! Timed phases of the drop sequence.
//!
//! Each phase keeps its own progress (elapsed time, start snapshot) and is
//! advanced by the tick driver with the frame delta. Nothing here blocks or
//! owns a clock; feeding synthetic deltas is enough to drive a phase.

use crate::core::Vec3;
use serde::{Deserialize, Serialize};

/// Durations at or below this complete on entry.
pub const INSTANT_DURATION: f32 = f32::EPSILON;

/// Closed claw waiting at the bottom before the prize check.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClampPhase {
    elapsed: f32,
    delay: f32,
}

impl ClampPhase {
    pub fn new(delay: f32) -> Self {
        Self {
            elapsed: 0.0,
            delay: delay.max(0.0),
        }
    }

    /// Accumulate `dt`. Returns `true` once the delay has fully elapsed.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.delay
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }
}

/// Outcome of advancing a [`ReturnPhase`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReturnStep {
    /// Still travelling; the claw is at this position.
    Moving(Vec3),
    /// Arrived; the claw is now exactly at [`ReturnPhase::target`].
    Arrived,
}

/// Linear travel from where the clamp happened back to the start position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnPhase {
    start: Vec3,
    target: Vec3,
    elapsed: f32,
    duration: f32,
}

impl ReturnPhase {
    /// Plan a return at `speed` units per second.
    ///
    /// A zero distance, or anything that would not yield a finite positive
    /// duration, plans an instant return.
    pub fn begin(start: Vec3, target: Vec3, speed: f32) -> Self {
        let duration = start.distance(target) / speed;
        let duration = if duration.is_finite() && duration > INSTANT_DURATION {
            duration
        } else {
            0.0
        };
        Self {
            start,
            target,
            elapsed: 0.0,
            duration,
        }
    }

    pub fn is_instant(&self) -> bool {
        self.duration <= INSTANT_DURATION
    }

    /// Accumulate `dt` and interpolate. The final step lands exactly on the
    /// target rather than on the interpolated value.
    pub fn advance(&mut self, dt: f32) -> ReturnStep {
        self.elapsed += dt;
        if self.is_instant() || self.elapsed >= self.duration {
            ReturnStep::Arrived
        } else {
            ReturnStep::Moving(Vec3::lerp(
                self.start,
                self.target,
                self.elapsed / self.duration,
            ))
        }
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}
