//! Random parameter sources.
//!
//! # Determinism strategy
//!
//! A single `SmallRng` drives the whole run: the arrival schedule is drawn
//! during priming and difficulties are drawn as arrivals are processed, both
//! from the same stream.  Because the event loop is sequential, the draw
//! order is a pure function of the seed and parameters, so two runs with the
//! same seed produce identical reports.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Smallest difficulty a client can draw.
pub const DIFFICULTY_MIN: u32 = 1;
/// Largest difficulty a client can draw (inclusive).
pub const DIFFICULTY_MAX: u32 = 10;

/// Supplies the stochastic inputs of a run.
///
/// Implementations may only advance their own internal state.
pub trait ParameterSource {
    /// Gap between two successive client arrivals.
    fn next_inter_arrival(&mut self) -> f64;

    /// Service duration of the next arriving client.
    fn next_difficulty(&mut self) -> u32;
}

impl<P: ParameterSource + ?Sized> ParameterSource for &mut P {
    fn next_inter_arrival(&mut self) -> f64 {
        (**self).next_inter_arrival()
    }

    fn next_difficulty(&mut self) -> u32 {
        (**self).next_difficulty()
    }
}

// ── UniformSource ─────────────────────────────────────────────────────────────

/// Intervals uniform over `[min, max)`, difficulties uniform over
/// `[DIFFICULTY_MIN, DIFFICULTY_MAX]`.
pub struct UniformSource {
    rng:          SmallRng,
    interval_min: f64,
    interval_max: f64,
}

impl UniformSource {
    /// Seeded source; the same seed always yields the same sequence.
    pub fn new(interval_min: f64, interval_max: f64, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            interval_min,
            interval_max,
        }
    }

    /// Production default: seeded from OS entropy.
    pub fn from_entropy(interval_min: f64, interval_max: f64) -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            interval_min,
            interval_max,
        }
    }
}

impl ParameterSource for UniformSource {
    fn next_inter_arrival(&mut self) -> f64 {
        // `gen_range` panics on an empty range.
        if self.interval_min >= self.interval_max {
            return self.interval_min;
        }
        self.rng.gen_range(self.interval_min..self.interval_max)
    }

    fn next_difficulty(&mut self) -> u32 {
        self.rng.gen_range(DIFFICULTY_MIN..=DIFFICULTY_MAX)
    }
}

// ── ScriptedSource ────────────────────────────────────────────────────────────

/// Replays fixed interval and difficulty sequences, in order.
///
/// Useful for trace-driven runs and hand-checked scenarios.  Asking for more
/// values than were scripted is a programming error and panics.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    intervals:    VecDeque<f64>,
    difficulties: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(
        intervals:    impl IntoIterator<Item = f64>,
        difficulties: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            intervals:    intervals.into_iter().collect(),
            difficulties: difficulties.into_iter().collect(),
        }
    }

    /// Values still unconsumed: `(intervals, difficulties)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.intervals.len(), self.difficulties.len())
    }
}

impl ParameterSource for ScriptedSource {
    fn next_inter_arrival(&mut self) -> f64 {
        match self.intervals.pop_front() {
            Some(v) => v,
            None => panic!("scripted source ran out of inter-arrival intervals"),
        }
    }

    fn next_difficulty(&mut self) -> u32 {
        match self.difficulties.pop_front() {
            Some(v) => v,
            None => panic!("scripted source ran out of difficulties"),
        }
    }
}
