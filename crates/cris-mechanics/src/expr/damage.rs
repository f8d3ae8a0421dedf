//! Damage expressions of the form `[count]d<faces>[+|-modifier]`.
//!
//! The lenient parser finds the first such expression anywhere in the
//! text ("Espada 2d6+1" parses), the strict one requires the whole
//! string to be an expression. On a critical hit the dice count is
//! multiplied; the modifier is always added exactly once.

use serde::{Deserialize, Serialize};

use super::{Token, lex};
use crate::dice::{DieSource, MAX_POOL_DICE};
use crate::error::{MechError, MechResult};

/// A parsed damage expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageExpr {
    /// Number of dice (1 when omitted).
    pub count: u32,
    /// Sides per die, never zero.
    pub faces: u32,
    /// Flat modifier added after the dice.
    pub modifier: i64,
}

impl DamageExpr {
    /// Find the first damage expression in `text`.
    pub fn parse(text: &str) -> Option<Self> {
        let tokens = lex(text);
        tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Token::Die)
            .find_map(|(i, _)| match_at(&tokens, i))
            .and_then(|(_, _, expr)| expr)
    }

    /// Parse `text` as exactly one damage expression.
    pub fn parse_strict(text: &str) -> MechResult<Self> {
        let invalid = || MechError::InvalidExpression(text.to_string());
        let tokens = lex(text.trim());
        let die_index = tokens
            .iter()
            .position(|t| *t == Token::Die)
            .ok_or_else(invalid)?;
        match match_at(&tokens, die_index) {
            Some((0, end, Some(expr))) if end == tokens.len() => Ok(expr),
            _ => Err(invalid()),
        }
    }

    /// Roll this expression, multiplying the dice count by `multiplier`.
    pub fn roll<S: DieSource + ?Sized>(&self, multiplier: u32, source: &mut S) -> DamageRoll {
        let wanted = u64::from(self.count) * u64::from(multiplier.max(1));
        let count = usize::try_from(wanted).unwrap_or(MAX_POOL_DICE).min(MAX_POOL_DICE);
        if wanted > count as u64 {
            tracing::warn!(wanted, count, "damage dice capped");
        }

        let dice = source.roll_many(count, self.faces);
        let total = dice
            .iter()
            .map(|d| i64::from(*d))
            .sum::<i64>()
            .saturating_add(self.modifier);
        DamageRoll {
            faces: self.faces,
            dice,
            modifier: self.modifier,
            total,
        }
    }
}

impl std::fmt::Display for DamageExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

/// Match the expression shape around the die marker at `die`.
///
/// Returns the token range covered and the expression, or `None` for the
/// expression when the shape matched but has zero faces.
fn match_at(tokens: &[Token], die: usize) -> Option<(usize, usize, Option<DamageExpr>)> {
    let Some(Token::Int(faces)) = tokens.get(die + 1) else {
        return None;
    };

    let (start, count) = match die.checked_sub(1).map(|i| tokens[i]) {
        Some(Token::Int(n)) => (die - 1, n),
        _ => (die, 1),
    };

    let (end, modifier) = match (tokens.get(die + 2), tokens.get(die + 3)) {
        (Some(Token::Plus), Some(Token::Int(m))) => (die + 4, signed(*m)),
        (Some(Token::Minus), Some(Token::Int(m))) => (die + 4, -signed(*m)),
        _ => (die + 2, 0),
    };

    let expr = (*faces > 0).then(|| DamageExpr {
        count: saturate(count),
        faces: saturate(*faces),
        modifier,
    });
    Some((start, end, expr))
}

fn saturate(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn signed(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// The result of a damage roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Sides of the dice rolled (0 for an unparseable expression).
    pub faces: u32,
    /// Every die rolled, in roll order.
    pub dice: Vec<u32>,
    /// Flat modifier that was added.
    pub modifier: i64,
    /// Sum of the dice plus the modifier.
    pub total: i64,
}

impl DamageRoll {
    /// The result reported for an expression that could not be parsed.
    pub fn zeroed() -> Self {
        Self {
            faces: 0,
            dice: vec![0],
            modifier: 0,
            total: 0,
        }
    }
}

impl std::fmt::Display for DamageRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        if self.faces > 0 {
            write!(f, "{}d{} ", self.dice.len(), self.faces)?;
        }
        write!(f, "[{}]", values.join(", "))?;
        match self.modifier {
            0 => {}
            m if m > 0 => write!(f, " + {m}")?,
            m => write!(f, " - {}", m.unsigned_abs())?,
        }
        write!(f, " = {}", self.total)
    }
}

/// Parse and roll a damage expression, never failing.
///
/// Critical hits roll `count * multiplier` dice. Text without a
/// recognisable expression yields [`DamageRoll::zeroed`].
pub fn roll_damage<S: DieSource + ?Sized>(
    text: &str,
    is_critical: bool,
    multiplier: u32,
    source: &mut S,
) -> DamageRoll {
    match DamageExpr::parse(text) {
        Some(expr) => expr.roll(if is_critical { multiplier } else { 1 }, source),
        None => {
            tracing::debug!(text, "unparseable damage expression, rolling zero");
            DamageRoll::zeroed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::SequenceSource;

    fn expr(count: u32, faces: u32, modifier: i64) -> DamageExpr {
        DamageExpr {
            count,
            faces,
            modifier,
        }
    }

    #[test]
    fn parse_canonical_forms() {
        assert_eq!(DamageExpr::parse("2d6+1"), Some(expr(2, 6, 1)));
        assert_eq!(DamageExpr::parse("1d12-1"), Some(expr(1, 12, -1)));
        assert_eq!(DamageExpr::parse("d20"), Some(expr(1, 20, 0)));
        assert_eq!(DamageExpr::parse("3D8"), Some(expr(3, 8, 0)));
    }

    #[test]
    fn parse_finds_expression_inside_text() {
        assert_eq!(DamageExpr::parse("sword 1d8+2 slash"), Some(expr(1, 8, 2)));
        assert_eq!(DamageExpr::parse("dd4"), Some(expr(1, 4, 0)));
        assert_eq!(DamageExpr::parse("-2d6"), Some(expr(2, 6, 0)));
        assert_eq!(DamageExpr::parse("2 d6"), Some(expr(1, 6, 0)));
    }

    #[test]
    fn dangling_sign_is_not_a_modifier() {
        assert_eq!(DamageExpr::parse("2d6+"), Some(expr(2, 6, 0)));
        assert_eq!(DamageExpr::parse("2d6 +1"), Some(expr(2, 6, 0)));
    }

    #[test]
    fn parse_rejects_non_expressions() {
        for text in ["", "banana", "2d", "d", "1d0"] {
            assert_eq!(DamageExpr::parse(text), None, "{text:?}");
        }
    }

    #[test]
    fn parse_is_pure() {
        assert_eq!(DamageExpr::parse("4d10-3"), DamageExpr::parse("4d10-3"));
    }

    #[test]
    fn strict_accepts_whole_expressions() {
        assert_eq!(DamageExpr::parse_strict("1d20+3").unwrap(), expr(1, 20, 3));
        assert_eq!(DamageExpr::parse_strict(" d6 ").unwrap(), expr(1, 6, 0));
    }

    #[test]
    fn strict_rejects_surrounding_text() {
        for text in ["roll 1d20", "1d20+", "1d20+3x", "2d0", "d", ""] {
            assert!(DamageExpr::parse_strict(text).is_err(), "{text:?}");
        }
    }

    #[test]
    fn roll_sums_dice_and_modifier() {
        let mut src = SequenceSource::new([4, 2]);
        let roll = expr(2, 6, 1).roll(1, &mut src);
        assert_eq!(roll.dice, vec![4, 2]);
        assert_eq!(roll.total, 7);
    }

    #[test]
    fn critical_multiplies_dice_not_modifier() {
        let mut src = SequenceSource::new([1, 2, 3, 4, 5, 6]);
        let roll = roll_damage("2d6+1", true, 3, &mut src);
        assert_eq!(roll.dice.len(), 6);
        assert_eq!(roll.modifier, 1);
        assert_eq!(roll.total, 21 + 1);
    }

    #[test]
    fn multiplier_ignored_without_critical() {
        let mut src = SequenceSource::new([5]);
        let roll = roll_damage("2d6+1", false, 3, &mut src);
        assert_eq!(roll.dice.len(), 2);
        assert_eq!(roll.total, 11);
    }

    #[test]
    fn unparseable_rolls_zero() {
        let mut src = SequenceSource::new([6]);
        for text in ["", "banana"] {
            let roll = roll_damage(text, true, 2, &mut src);
            assert_eq!(roll, DamageRoll::zeroed());
            assert_eq!(roll.dice, vec![0]);
            assert_eq!(roll.total, 0);
        }
        assert_eq!(src.drawn(), 0);
    }

    #[test]
    fn zero_count_adds_only_modifier() {
        let mut src = SequenceSource::new([6]);
        let roll = roll_damage("0d6+3", false, 2, &mut src);
        assert!(roll.dice.is_empty());
        assert_eq!(roll.total, 3);
    }

    #[test]
    fn huge_count_is_capped() {
        let mut src = SequenceSource::new([1]);
        let roll = roll_damage("4000000000d4", true, 10, &mut src);
        assert_eq!(roll.dice.len(), MAX_POOL_DICE);
    }

    #[test]
    fn display() {
        assert_eq!(expr(2, 6, 1).to_string(), "2d6+1");
        assert_eq!(expr(1, 12, -1).to_string(), "1d12-1");
        let roll = DamageRoll {
            faces: 8,
            dice: vec![6, 3],
            modifier: 2,
            total: 11,
        };
        assert_eq!(roll.to_string(), "2d8 [6, 3] + 2 = 11");
        assert_eq!(DamageRoll::zeroed().to_string(), "[0] = 0");
    }
}
