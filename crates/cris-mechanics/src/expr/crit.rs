//! Critical-hit rules such as `19/x2`.
//!
//! The scanner is loose: the first integer in the text is
//! the threshold and the next integer after it is the multiplier,
//! whatever sits between them. `19/x2`, `19x2`, `19/2x` and `19/2` all
//! read the same.

use serde::{Deserialize, Serialize};

use super::{Token, lex};

/// Threshold used when none is given.
pub const DEFAULT_THRESHOLD: u32 = 20;

/// Multiplier used when none is given.
pub const DEFAULT_MULTIPLIER: u32 = 2;

/// When a to-hit die is critical and how much it multiplies damage dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CritRule {
    /// Minimum kept d20 value that counts as a critical hit.
    pub threshold: u32,
    /// Factor applied to the damage dice count on a critical hit.
    pub multiplier: u32,
}

impl Default for CritRule {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl CritRule {
    /// Parse a critical rule, falling back to `20/x2` for anything
    /// without a threshold.
    pub fn parse(text: &str) -> Self {
        Self::parse_explicit(text).unwrap_or_else(|| {
            if !text.trim().is_empty() {
                tracing::debug!(text, "critical expression has no number, using 20/x2");
            }
            Self::default()
        })
    }

    /// Parse a critical rule, returning `None` when the text holds no
    /// integer at all.
    ///
    /// Zero is never a valid threshold or multiplier and reads as the
    /// default for that slot.
    pub fn parse_explicit(text: &str) -> Option<Self> {
        let mut numbers = lex(text).into_iter().filter_map(|t| match t {
            Token::Int(n) => Some(n),
            _ => None,
        });

        let threshold = numbers.next()?;
        let multiplier = numbers.next();

        Some(Self {
            threshold: nonzero_or(Some(threshold), DEFAULT_THRESHOLD),
            multiplier: nonzero_or(multiplier, DEFAULT_MULTIPLIER),
        })
    }

    /// Returns true if the kept to-hit die scores a critical hit.
    pub fn is_critical(&self, chosen: u32) -> bool {
        chosen >= self.threshold
    }
}

fn nonzero_or(value: Option<u64>, default: u32) -> u32 {
    match value {
        Some(0) | None => default,
        Some(n) => u32::try_from(n).unwrap_or(u32::MAX),
    }
}

impl std::fmt::Display for CritRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/x{}", self.threshold, self.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(threshold: u32, multiplier: u32) -> CritRule {
        CritRule {
            threshold,
            multiplier,
        }
    }

    #[test]
    fn parse_shorthand_forms() {
        assert_eq!(CritRule::parse("19/x2"), rule(19, 2));
        assert_eq!(CritRule::parse("19x2"), rule(19, 2));
        assert_eq!(CritRule::parse("19/2x"), rule(19, 2));
        assert_eq!(CritRule::parse("19/5"), rule(19, 5));
        assert_eq!(CritRule::parse("18/x10"), rule(18, 10));
        assert_eq!(CritRule::parse(" 17 , X3 "), rule(17, 3));
    }

    #[test]
    fn missing_multiplier_defaults_to_two() {
        assert_eq!(CritRule::parse("19"), rule(19, 2));
        assert_eq!(CritRule::parse("x3"), rule(3, 2));
    }

    #[test]
    fn malformed_defaults_to_twenty_x2() {
        for text in ["", "   ", "crit", "x/x"] {
            assert_eq!(CritRule::parse(text), CritRule::default(), "{text:?}");
            assert_eq!(CritRule::parse_explicit(text), None, "{text:?}");
        }
    }

    #[test]
    fn zero_reads_as_default() {
        assert_eq!(CritRule::parse("0/x0"), rule(20, 2));
        assert_eq!(CritRule::parse("19/x0"), rule(19, 2));
    }

    #[test]
    fn parse_is_pure() {
        assert_eq!(CritRule::parse("18/x3"), CritRule::parse("18/x3"));
    }

    #[test]
    fn critical_at_or_above_threshold() {
        let r = rule(19, 2);
        assert!(!r.is_critical(18));
        assert!(r.is_critical(19));
        assert!(r.is_critical(20));
    }

    #[test]
    fn display() {
        assert_eq!(rule(19, 2).to_string(), "19/x2");
        assert_eq!(CritRule::default().to_string(), "20/x2");
    }
}
