//! Advantage/penalty d20 pools sized by an attribute value.
//!
//! A positive attribute rolls that many d20 and keeps the best. Zero or
//! a negative attribute rolls `|value| + 2` d20 and keeps the worst.

use serde::{Deserialize, Serialize};

use super::{CHECK_DIE, DieSource};

/// Upper bound on dice rolled for a single pool or damage roll.
pub const MAX_POOL_DICE: usize = 1000;

/// Which die of the pool is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolMode {
    /// Keep the highest die (positive attribute).
    Advantage,
    /// Keep the lowest die (zero or negative attribute).
    Penalty,
}

impl PoolMode {
    /// The mode an attribute value rolls with.
    pub fn for_value(value: i32) -> Self {
        if value > 0 {
            Self::Advantage
        } else {
            Self::Penalty
        }
    }
}

impl std::fmt::Display for PoolMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Advantage => write!(f, "best"),
            Self::Penalty => write!(f, "worst"),
        }
    }
}

/// Number of d20 an attribute value calls for, before the pool cap.
pub fn pool_size(value: i32) -> u64 {
    if value > 0 {
        u64::from(value.unsigned_abs())
    } else {
        u64::from(value.unsigned_abs()) + 2
    }
}

/// The outcome of rolling a check pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRoll {
    /// Every d20 rolled, in roll order.
    pub dice: Vec<u32>,
    /// The kept die.
    pub chosen: u32,
    /// Whether the best or worst die was kept.
    pub mode: PoolMode,
}

impl PoolRoll {
    /// Returns true if this pool kept its lowest die.
    pub fn is_penalty(&self) -> bool {
        self.mode == PoolMode::Penalty
    }

    /// Number of dice in the pool.
    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }
}

impl std::fmt::Display for PoolRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(
            f,
            "{}d{CHECK_DIE} [{}] {} {}",
            self.dice.len(),
            values.join(", "),
            self.mode,
            self.chosen
        )
    }
}

/// Roll the check pool for an attribute value.
pub fn roll_pool<S: DieSource + ?Sized>(value: i32, source: &mut S) -> PoolRoll {
    let mode = PoolMode::for_value(value);
    let wanted = pool_size(value);
    let count = usize::try_from(wanted).unwrap_or(MAX_POOL_DICE).min(MAX_POOL_DICE);
    if wanted > count as u64 {
        tracing::warn!(value, wanted, count, "check pool capped");
    }

    let dice = source.roll_many(count, CHECK_DIE);
    let chosen = match mode {
        PoolMode::Advantage => dice.iter().copied().max(),
        PoolMode::Penalty => dice.iter().copied().min(),
    }
    .unwrap_or(0);

    PoolRoll { dice, chosen, mode }
}
