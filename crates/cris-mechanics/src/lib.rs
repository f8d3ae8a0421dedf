//! Roll resolution engine for C.R.I.S. character sheets.
//!
//! Provides d20 advantage/penalty pools, lenient damage and critical
//! expression parsers, the attribute/skill/attack rollers, and the
//! character sheet data model they read from. Randomness is always
//! injected through a [`DieSource`], so every roll can be replayed.

pub mod config;
pub mod dice;
pub mod error;
pub mod expr;
pub mod roll;
pub mod sheet;
pub mod validate;

pub use config::RollConfig;
pub use dice::{DieSource, MAX_POOL_DICE, PoolMode, PoolRoll, SequenceSource};
pub use error::{MechError, MechResult};
pub use expr::{CritRule, DamageExpr, DamageRoll};
pub use roll::{
    AttackRoll, AttributeRoll, DiceRoll, RollRequest, RollResult, SkillRoll, roll,
    roll_attack, roll_attribute, roll_expression, roll_skill,
};
pub use sheet::{
    Attack, AttackPatch, Attribute, AttributeMap, CharacterSheet, Defense, Profile, Skill,
    SkillList, StatusBar,
};
pub use validate::{ValidationIssue, validate_sheet};
