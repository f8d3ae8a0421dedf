//! The free dice roller: any `NdM+K` expression, outside a sheet.

use serde::{Deserialize, Serialize};

use crate::dice::DieSource;
use crate::error::MechResult;
use crate::expr::{DamageExpr, DamageRoll};

/// The result of a free dice roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// The expression as typed.
    pub expression: String,
    /// The parsed expression.
    pub parsed: DamageExpr,
    /// Dice, modifier and total.
    pub roll: DamageRoll,
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.expression, self.roll)
    }
}

/// Roll a strict dice expression such as `1d20+3`.
///
/// Unlike attack damage, malformed text is an error here.
pub fn roll_expression<S: DieSource + ?Sized>(text: &str, source: &mut S) -> MechResult<DiceRoll> {
    let parsed = DamageExpr::parse_strict(text)?;
    let roll = parsed.roll(1, source);
    tracing::debug!(expression = text, dice = ?roll.dice, total = roll.total, "dice roll");
    Ok(DiceRoll {
        expression: text.trim().to_string(),
        parsed,
        roll,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::SequenceSource;
    use crate::error::MechError;

    #[test]
    fn rolls_expression() {
        let mut src = SequenceSource::new([14]);
        let roll = roll_expression("1d20+3", &mut src).unwrap();
        assert_eq!(roll.roll.dice, vec![14]);
        assert_eq!(roll.roll.total, 17);
        assert_eq!(roll.to_string(), "1d20+3: 1d20 [14] + 3 = 17");
    }

    #[test]
    fn rejects_malformed() {
        let mut src = SequenceSource::new([1]);
        assert!(matches!(
            roll_expression("banana", &mut src),
            Err(MechError::InvalidExpression(_))
        ));
        assert_eq!(src.drawn(), 0);
    }
}
