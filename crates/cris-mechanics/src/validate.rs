//! Consistency checks over a character sheet.
//!
//! The roller never fails on a bad sheet; it falls back to defaults. These
//! checks surface the places where that fallback would kick in, so a user
//! can see why an attack did zero damage or a skill had no bonus.

use std::collections::HashSet;

use serde_json::Value;

use crate::dice::{MAX_POOL_DICE, pool_size};
use crate::expr::{CritRule, DamageExpr};
use crate::sheet::{CharacterSheet, TRAINING_LADDER};

/// A warning or error found on a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// What the issue is about, e.g. `attack 'Espada'`.
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(subject: String, message: String) -> Self {
        Self {
            subject,
            message,
            is_error: true,
        }
    }

    fn warning(subject: String, message: String) -> Self {
        Self {
            subject,
            message,
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Validate a sheet. Returns every issue found, errors and warnings mixed,
/// in sheet order.
pub fn validate_sheet(sheet: &CharacterSheet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    validate_attributes(sheet, &mut issues);
    validate_skills(sheet, &mut issues);
    validate_attacks(sheet, &mut issues);
    issues
}

fn validate_attributes(sheet: &CharacterSheet, issues: &mut Vec<ValidationIssue>) {
    for (attr, value) in sheet.attributes.iter() {
        let size = pool_size(value);
        if size > MAX_POOL_DICE as u64 {
            issues.push(ValidationIssue::warning(
                format!("attribute {attr}"),
                format!("value {value} calls for {size}d20, only {MAX_POOL_DICE} will be rolled"),
            ));
        }
    }
}

fn validate_skills(sheet: &CharacterSheet, issues: &mut Vec<ValidationIssue>) {
    for name in sheet.skills.duplicates() {
        issues.push(ValidationIssue::error(
            format!("skill '{name}'"),
            "defined more than once; only the first entry is used".to_string(),
        ));
    }

    for skill in &sheet.skills {
        if !TRAINING_LADDER.contains(&skill.training) {
            issues.push(ValidationIssue::warning(
                format!("skill '{}'", skill.name),
                format!(
                    "training {} is not one of {}",
                    skill.training,
                    ladder_list()
                ),
            ));
        }
    }
}

fn validate_attacks(sheet: &CharacterSheet, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for attack in &sheet.attacks {
        let subject = format!("attack '{}'", attack.name);

        if !seen.insert(attack.id) && reported.insert(attack.id) {
            issues.push(ValidationIssue::error(
                subject.clone(),
                format!("id {} is shared with another attack", attack.id),
            ));
        }

        if let Some(raw) = &attack.unresolved_attr {
            let code = match raw {
                Value::String(code) => code.clone(),
                other => other.to_string(),
            };
            issues.push(ValidationIssue::warning(
                subject.clone(),
                format!("attribute '{code}' unknown, to-hit rolls as 0"),
            ));
        }

        if sheet.skill(&attack.skill).is_none() {
            issues.push(ValidationIssue::warning(
                subject.clone(),
                format!("skill '{}' not found, to-hit bonus will be 0", attack.skill),
            ));
        }

        if DamageExpr::parse(&attack.damage).is_none() {
            issues.push(ValidationIssue::warning(
                subject.clone(),
                format!("damage '{}' is not a dice expression, damage will be 0", attack.damage),
            ));
        }

        if !attack.crit.trim().is_empty() && CritRule::parse_explicit(&attack.crit).is_none() {
            issues.push(ValidationIssue::warning(
                subject,
                format!("critical '{}' has no number, 20/x2 will be used", attack.crit),
            ));
        }
    }
}

fn ladder_list() -> String {
    TRAINING_LADDER
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
