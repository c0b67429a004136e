//! Prize detection and clamp bookkeeping.
//!
//! Real collision checks against prize geometry belong to the host. The
//! machine only needs a yes/no answer once per clamp, so detection sits
//! behind [`PrizeDetector`]; [`RandomPrizeDetector`] is the cabinet's
//! stand-in policy.

use crate::core::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides whether a clamp at `claw` picked up a prize.
///
/// Called exactly once per clamp phase; the answer is consumed
/// immediately.
pub trait PrizeDetector: Send {
    fn check_for_prize(&mut self, claw: Vec3) -> bool;
}

/// Succeeds with a fixed probability, independent of position.
#[derive(Debug, Clone)]
pub struct RandomPrizeDetector {
    probability: f64,
    rng: StdRng,
}

impl RandomPrizeDetector {
    /// Detector seeded from the operating system.
    pub fn from_entropy(probability: f32) -> Self {
        Self {
            probability: sanitize_probability(probability),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic detector for replays and tests.
    pub fn seeded(probability: f32, seed: u64) -> Self {
        Self {
            probability: sanitize_probability(probability),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

fn sanitize_probability(probability: f32) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        f64::from(probability).clamp(0.0, 1.0)
    }
}

impl PrizeDetector for RandomPrizeDetector {
    fn check_for_prize(&mut self, _claw: Vec3) -> bool {
        self.rng.gen_bool(self.probability)
    }
}

/// Always returns the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPrizeDetector(pub bool);

impl PrizeDetector for FixedPrizeDetector {
    fn check_for_prize(&mut self, _claw: Vec3) -> bool {
        self.0
    }
}

/// Owns the detector and whether a prize is currently held.
pub(crate) struct PrizeResolver {
    detector: Box<dyn PrizeDetector>,
    clamped: bool,
}

impl PrizeResolver {
    pub(crate) fn new(detector: Box<dyn PrizeDetector>) -> Self {
        Self {
            detector,
            clamped: false,
        }
    }

    /// Run the prize check and remember the outcome.
    pub(crate) fn resolve(&mut self, claw: Vec3) -> bool {
        self.clamped = self.detector.check_for_prize(claw);
        self.clamped
    }

    /// Let go of the prize. Returns `true` if one was held.
    pub(crate) fn release(&mut self) -> bool {
        std::mem::replace(&mut self.clamped, false)
    }

    pub(crate) fn is_clamped(&self) -> bool {
        self.clamped
    }
}

impl std::fmt::Debug for PrizeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrizeResolver")
            .field("clamped", &self.clamped)
            .finish_non_exhaustive()
    }
}
