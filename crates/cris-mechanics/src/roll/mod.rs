//! The roll engine.
//!
//! [`roll_attribute`], [`roll_skill`] and [`roll_attack`] are pure
//! functions of the sheet data they are handed and the die source; they
//! never fail. [`roll`] adds name lookup on top for callers that only
//! know what the user clicked.

pub mod attack;
pub mod check;
pub mod free;

pub use attack::{AttackRoll, roll_attack};
pub use check::{AttributeRoll, SkillRoll, roll_attribute, roll_skill};
pub use free::{DiceRoll, roll_expression};

use serde::{Deserialize, Serialize};

use crate::dice::DieSource;
use crate::error::{MechError, MechResult};
use crate::sheet::{Attribute, CharacterSheet};

/// The outcome of any roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollResult {
    /// A raw attribute check.
    Attribute(AttributeRoll),
    /// A skill check.
    Skill(SkillRoll),
    /// An attack with damage.
    Attack(AttackRoll),
    /// A free dice expression.
    Dice(DiceRoll),
}

impl RollResult {
    /// The headline number: check total, to-hit total, or dice total.
    pub fn total(&self) -> i64 {
        match self {
            Self::Attribute(r) => r.total,
            Self::Skill(r) => r.total,
            Self::Attack(r) => r.to_hit,
            Self::Dice(r) => r.roll.total,
        }
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attribute(r) => write!(f, "{r}"),
            Self::Skill(r) => write!(f, "{r}"),
            Self::Attack(r) => write!(f, "{r}"),
            Self::Dice(r) => write!(f, "{r}"),
        }
    }
}

/// What to roll on a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollRequest {
    /// Roll an attribute.
    Attribute(Attribute),
    /// Roll the skill with this name.
    Skill(String),
    /// Roll the attack with this id or name.
    Attack(String),
}

/// Roll on a sheet, looking up skills and attacks by name.
pub fn roll<S: DieSource + ?Sized>(
    sheet: &CharacterSheet,
    request: &RollRequest,
    source: &mut S,
) -> MechResult<RollResult> {
    match request {
        RollRequest::Attribute(attr) => Ok(RollResult::Attribute(roll_attribute(
            &sheet.attributes,
            *attr,
            source,
        ))),
        RollRequest::Skill(name) => {
            let skill = sheet
                .skill(name)
                .ok_or_else(|| MechError::UnknownSkill(name.clone()))?;
            Ok(RollResult::Skill(roll_skill(&sheet.attributes, skill, source)))
        }
        RollRequest::Attack(key) => {
            let attack = sheet
                .attack(key)
                .ok_or_else(|| MechError::UnknownAttack(key.clone()))?;
            Ok(RollResult::Attack(roll_attack(
                &sheet.attributes,
                &sheet.skills,
                attack,
                source,
            )))
        }
    }
}
