//! # Decider
//!
//! This module contains the [`Decider`] trait, which decides whether a given
//! request succeeds or is answered with the simulated failure. The decision
//! is one uniform draw against the configured failure percentage.
//!
//! The RNG is passed in by the caller rather than pulled from thread-local
//! state, so the process can seed it once at startup and tests can supply a
//! fixed-seed generator.

use crate::config::FailurePercent;
use rand::Rng;

/// The simulated result of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Answered with the success status and body.
    Success,
    /// Answered with the simulated failure status and body.
    Failure,
}

impl Outcome {
    /// `true` for [`Outcome::Failure`].
    pub fn is_failure(self) -> bool {
        matches!(self, Outcome::Failure)
    }
}

/// Trait for deciding the outcome of a single request.
pub trait Decider {
    /// Decide whether the current request succeeds or fails.
    fn decide<R: Rng>(&self, rng: &mut R) -> Outcome;
}

impl Decider for FailurePercent {
    /// Draws one uniform integer in `[0, 100)` and fails iff it lands below
    /// the percentage, so 0 never fails and 100 always does.
    fn decide<R: Rng>(&self, rng: &mut R) -> Outcome {
        if rng.gen_range(0..100u8) < self.get() {
            Outcome::Failure
        } else {
            Outcome::Success
        }
    }
}
