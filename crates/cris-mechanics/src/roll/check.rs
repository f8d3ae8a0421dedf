//! Attribute and skill checks.

use serde::{Deserialize, Serialize};

use crate::dice::{DieSource, PoolRoll, roll_pool};
use crate::sheet::{Attribute, AttributeMap, Skill};

/// The result of a raw attribute check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRoll {
    /// Attribute rolled.
    pub attribute: Attribute,
    /// Attribute value that sized the pool.
    pub value: i32,
    /// The d20 pool.
    pub pool: PoolRoll,
    /// Final result; always the kept die.
    pub total: i64,
}

impl std::fmt::Display for AttributeRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} = {}", self.attribute, self.pool, self.total)
    }
}

/// The result of a skill check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRoll {
    /// Skill rolled.
    pub skill: String,
    /// Attribute the skill rolls with.
    pub attribute: Attribute,
    /// Attribute value that sized the pool.
    pub value: i32,
    /// The d20 pool.
    pub pool: PoolRoll,
    /// Training plus other bonus.
    pub modifier: i64,
    /// Kept die plus modifier.
    pub total: i64,
}

impl std::fmt::Display for SkillRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} {} = {}",
            self.skill,
            self.attribute,
            self.pool,
            signed_term(self.modifier),
            self.total
        )
    }
}

/// Format a modifier as `+ n` or `- n`.
pub(crate) fn signed_term(modifier: i64) -> String {
    if modifier < 0 {
        format!("- {}", modifier.unsigned_abs())
    } else {
        format!("+ {modifier}")
    }
}

/// Roll a raw attribute check.
pub fn roll_attribute<S: DieSource + ?Sized>(
    attributes: &AttributeMap,
    attr: Attribute,
    source: &mut S,
) -> AttributeRoll {
    let value = attributes.get(attr);
    let pool = roll_pool(value, source);
    let total = i64::from(pool.chosen);
    tracing::debug!(%attr, value, dice = ?pool.dice, total, "attribute roll");
    AttributeRoll {
        attribute: attr,
        value,
        pool,
        total,
    }
}

/// Roll a skill check: the skill attribute's pool plus its bonuses.
pub fn roll_skill<S: DieSource + ?Sized>(
    attributes: &AttributeMap,
    skill: &Skill,
    source: &mut S,
) -> SkillRoll {
    let value = attributes.get(skill.attr);
    let pool = roll_pool(value, source);
    let modifier = skill.bonus();
    let total = i64::from(pool.chosen).saturating_add(modifier);
    tracing::debug!(skill = %skill.name, value, dice = ?pool.dice, modifier, total, "skill roll");
    SkillRoll {
        skill: skill.name.clone(),
        attribute: skill.attr,
        value,
        pool,
        modifier,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::SequenceSource;

    fn attrs(attr: Attribute, value: i32) -> AttributeMap {
        let mut map = AttributeMap::default();
        map.set(attr, value);
        map
    }

    #[test]
    fn attribute_roll_keeps_best_of_positive_pool() {
        let map = attrs(Attribute::Agility, 3);
        let mut src = SequenceSource::new([4, 17, 9]);
        let roll = roll_attribute(&map, Attribute::Agility, &mut src);
        assert_eq!(roll.pool.dice_count(), 3);
        assert_eq!(roll.pool.dice, vec![4, 17, 9]);
        assert_eq!(roll.pool.chosen, 17);
        assert_eq!(roll.total, 17);
        assert!(!roll.pool.is_penalty());
    }

    #[test]
    fn missing_attribute_rolls_two_dice_penalty() {
        let map = AttributeMap::default();
        let mut src = SequenceSource::new([11, 8]);
        let roll = roll_attribute(&map, Attribute::Presence, &mut src);
        assert_eq!(roll.value, 0);
        assert_eq!(roll.pool.dice_count(), 2);
        assert_eq!(roll.total, 8);
        assert!(roll.pool.is_penalty());
    }

    #[test]
    fn skill_roll_adds_bonuses_to_worst_die() {
        let map = attrs(Attribute::Intellect, -1);
        let skill = Skill {
            training: 10,
            other: 2,
            ..Skill::new("Investigação", Attribute::Intellect)
        };
        let mut src = SequenceSource::new([12, 3, 20]);
        let roll = roll_skill(&map, &skill, &mut src);
        assert_eq!(roll.pool.dice_count(), 3);
        assert!(roll.pool.is_penalty());
        assert_eq!(roll.pool.chosen, 3);
        assert_eq!(roll.modifier, 12);
        assert_eq!(roll.total, 15);
    }

    #[test]
    fn skill_total_is_chosen_plus_bonuses() {
        let map = attrs(Attribute::Strength, 2);
        for (training, other) in [(0, 0), (5, -3), (30, 7), (0, -10)] {
            let skill = Skill {
                training,
                other,
                ..Skill::new("Luta", Attribute::Strength)
            };
            let mut src = SequenceSource::new([6, 14]);
            let roll = roll_skill(&map, &skill, &mut src);
            assert_eq!(roll.total, 14 + training + other);
        }
    }

    #[test]
    fn display() {
        let map = attrs(Attribute::Intellect, -1);
        let skill = Skill {
            training: 10,
            other: 2,
            ..Skill::new("Medicina", Attribute::Intellect)
        };
        let mut src = SequenceSource::new([12, 3, 20]);
        assert_eq!(
            roll_skill(&map, &skill, &mut src).to_string(),
            "Medicina (INT): 3d20 [12, 3, 20] worst 3 + 12 = 15"
        );
        let mut src = SequenceSource::new([4, 17, 9]);
        let map = attrs(Attribute::Agility, 3);
        assert_eq!(
            roll_attribute(&map, Attribute::Agility, &mut src).to_string(),
            "AGI: 3d20 [4, 17, 9] best 17 = 17"
        );
    }
}
