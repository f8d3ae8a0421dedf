//! Attack resolution: to-hit pool, critical check, damage.

use serde::{Deserialize, Serialize};

use super::check::signed_term;
use crate::dice::{DieSource, PoolRoll, roll_pool};
use crate::expr::{CritRule, DamageRoll, roll_damage};
use crate::sheet::{Attack, Attribute, AttributeMap, SkillList};

/// The result of an attack roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRoll {
    /// Attack name.
    pub attack: String,
    /// Attack id.
    pub attack_id: i64,
    /// Attribute used for the to-hit pool, if the attack names one.
    pub attribute: Option<Attribute>,
    /// Attribute value that sized the pool.
    pub value: i32,
    /// The to-hit d20 pool.
    pub pool: PoolRoll,
    /// The critical rule in force.
    pub crit: CritRule,
    /// Whether the kept die reached the critical threshold.
    pub critical: bool,
    /// Bonus of the referenced skill (0 if it does not exist).
    pub modifier: i64,
    /// Kept die plus modifier.
    pub to_hit: i64,
    /// The damage roll.
    pub damage: DamageRoll,
    /// Damage type label.
    pub damage_type: String,
}

impl std::fmt::Display for AttackRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.attack)?;
        if let Some(attr) = self.attribute {
            write!(f, " ({attr})")?;
        }
        write!(
            f,
            ": {} {} = {}",
            self.pool,
            signed_term(self.modifier),
            self.to_hit
        )?;
        if self.critical {
            write!(f, " CRITICAL ({})", self.crit)?;
        }
        write!(f, "; damage {}", self.damage)?;
        if !self.damage_type.is_empty() {
            write!(f, " {}", self.damage_type)?;
        }
        Ok(())
    }
}

/// Resolve an attack. Never fails: bad expressions and missing skills
/// fall back to defaults.
pub fn roll_attack<S: DieSource + ?Sized>(
    attributes: &AttributeMap,
    skills: &SkillList,
    attack: &Attack,
    source: &mut S,
) -> AttackRoll {
    let crit = attack.crit_rule();
    let value = attack.attr.map(|a| attributes.get(a)).unwrap_or(0);
    let pool = roll_pool(value, source);
    let critical = crit.is_critical(pool.chosen);

    let modifier = match skills.get(&attack.skill) {
        Some(skill) => skill.bonus(),
        None => {
            tracing::debug!(attack = %attack.name, skill = %attack.skill, "attack skill not found, bonus 0");
            0
        }
    };
    let to_hit = i64::from(pool.chosen).saturating_add(modifier);

    let damage = roll_damage(&attack.damage, critical, crit.multiplier, source);
    tracing::debug!(
        attack = %attack.name,
        dice = ?pool.dice,
        to_hit,
        critical,
        damage = damage.total,
        "attack roll"
    );

    AttackRoll {
        attack: attack.name.clone(),
        attack_id: attack.id,
        attribute: attack.attr,
        value,
        pool,
        crit,
        critical,
        modifier,
        to_hit,
        damage,
        damage_type: attack.damage_type.clone(),
    }
}
