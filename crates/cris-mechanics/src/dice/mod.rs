//! Randomness sources and d20 check pools.
//!
//! Every roll in the engine draws from a [`DieSource`] passed in by the
//! caller. [`StdRng`] is the production source; [`SequenceSource`] replays
//! a fixed list of values so rolls can be scripted.

pub mod pool;

pub use pool::{MAX_POOL_DICE, PoolMode, PoolRoll, pool_size, roll_pool};

use rand::Rng;
use rand::rngs::StdRng;

/// Sides on the die used for attribute, skill and to-hit checks.
pub const CHECK_DIE: u32 = 20;

/// A source of uniformly distributed die results.
pub trait DieSource {
    /// Roll one die, returning a value in `1..=sides`.
    ///
    /// A zero-sided die is treated as one-sided.
    fn roll(&mut self, sides: u32) -> u32;

    /// Roll `count` dice with the same number of sides.
    fn roll_many(&mut self, count: usize, sides: u32) -> Vec<u32> {
        (0..count).map(|_| self.roll(sides)).collect()
    }
}

impl DieSource for StdRng {
    fn roll(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

/// A deterministic source that replays a fixed sequence of values.
///
/// The sequence repeats once exhausted. Values outside `1..=sides` are
/// clamped into range, so any list is a valid script.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<u32>,
    next: usize,
}

impl SequenceSource {
    /// Create a source that yields `values` in order, cycling.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl DieSource for SequenceSource {
    fn roll(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        if self.values.is_empty() {
            self.next += 1;
            return 1;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(1, sides)
    }
}
