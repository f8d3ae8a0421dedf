//! Attacks (ataques) and their editable fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Attribute, coerce};
use crate::expr::{CritRule, DamageExpr};

/// A combat action: a to-hit roll plus a damage expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AttackDocument", into = "AttackDocument")]
pub struct Attack {
    /// Creation timestamp in milliseconds, used as identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Damage expression, e.g. `2d6+1`.
    pub damage: String,
    /// Critical expression, e.g. `19/x2`. Empty means `20/x2`.
    pub crit: String,
    /// Damage type label.
    pub damage_type: String,
    /// Attribute used for the to-hit pool. `None` rolls as zero.
    pub attr: Option<Attribute>,
    /// The stored `attr` value when it names no known attribute.
    /// Written back unchanged on save.
    pub unresolved_attr: Option<Value>,
    /// Name of the skill whose bonus applies to the to-hit roll.
    pub skill: String,
    /// Free-form description.
    pub description: String,
}

/// Stored shape of an attack. `attr` stays raw so that a bad code
/// loads as "no attribute" instead of failing the whole sheet.
#[derive(Serialize, Deserialize)]
struct AttackDocument {
    #[serde(default, deserialize_with = "coerce::lenient_int")]
    id: i64,
    #[serde(rename = "nome", default)]
    name: String,
    #[serde(rename = "dano", default)]
    damage: String,
    #[serde(default)]
    crit: String,
    #[serde(rename = "tipo", default)]
    damage_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attr: Option<Value>,
    #[serde(default)]
    skill: String,
    #[serde(rename = "desc", default)]
    description: String,
}

impl From<AttackDocument> for Attack {
    fn from(doc: AttackDocument) -> Self {
        let (attr, unresolved_attr) = coerce::resolve_attr(doc.attr);
        if let Some(raw) = &unresolved_attr {
            tracing::debug!(attack = %doc.name, attr = %raw, "unknown attack attribute, rolling as 0");
        }
        Self {
            id: doc.id,
            name: doc.name,
            damage: doc.damage,
            crit: doc.crit,
            damage_type: doc.damage_type,
            attr,
            unresolved_attr,
            skill: doc.skill,
            description: doc.description,
        }
    }
}

impl From<Attack> for AttackDocument {
    fn from(attack: Attack) -> Self {
        let attr = attack
            .attr
            .map(|a| Value::String(a.code().to_string()))
            .or(attack.unresolved_attr);
        Self {
            id: attack.id,
            name: attack.name,
            damage: attack.damage,
            crit: attack.crit,
            damage_type: attack.damage_type,
            attr,
            skill: attack.skill,
            description: attack.description,
        }
    }
}

impl Attack {
    /// A new attack with the sheet's defaults: `1d6`, `20/x2`, FOR, Luta.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: "Novo Ataque".to_string(),
            damage: "1d6".to_string(),
            crit: "20/x2".to_string(),
            damage_type: String::new(),
            attr: Some(Attribute::Strength),
            unresolved_attr: None,
            skill: "Luta".to_string(),
            description: String::new(),
        }
    }

    /// The parsed critical rule, with defaults for missing parts.
    pub fn crit_rule(&self) -> CritRule {
        CritRule::parse(&self.crit)
    }

    /// The parsed damage expression, if the text holds one.
    pub fn damage_expr(&self) -> Option<DamageExpr> {
        DamageExpr::parse(&self.damage)
    }

    /// Apply every field set in `patch`.
    pub fn apply(&mut self, patch: &AttackPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(damage) = &patch.damage {
            self.damage.clone_from(damage);
        }
        if let Some(crit) = &patch.crit {
            self.crit.clone_from(crit);
        }
        if let Some(damage_type) = &patch.damage_type {
            self.damage_type.clone_from(damage_type);
        }
        if let Some(attr) = patch.attr {
            self.attr = Some(attr);
            self.unresolved_attr = None;
        }
        if let Some(skill) = &patch.skill {
            self.skill.clone_from(skill);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
    }
}

/// A partial update to an [`Attack`]. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackPatch {
    /// New name.
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New damage expression.
    #[serde(rename = "dano", default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    /// New critical expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit: Option<String>,
    /// New damage type.
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<String>,
    /// New to-hit attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<Attribute>,
    /// New skill reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    /// New description.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Identifier for an attack created now: the current epoch milliseconds.
pub fn new_attack_id() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_attack_defaults() {
        let attack = Attack::new(7);
        assert_eq!(attack.id, 7);
        assert_eq!(attack.name, "Novo Ataque");
        assert_eq!(attack.crit_rule(), CritRule::default());
        assert_eq!(attack.damage_expr().unwrap().faces, 6);
        assert_eq!(attack.attr, Some(Attribute::Strength));
        assert_eq!(attack.skill, "Luta");
    }

    #[test]
    fn reads_sheet_field_names() {
        let attack: Attack = serde_json::from_value(json!({
            "id": 1700000000000i64,
            "nome": "Espada",
            "dano": "1d8+2",
            "crit": "19/x2",
            "tipo": "corte",
            "attr": "FOR",
            "skill": "Luta",
            "desc": "longa"
        }))
        .unwrap();
        assert_eq!(attack.name, "Espada");
        assert_eq!(attack.damage_type, "corte");
        assert_eq!(attack.crit_rule().threshold, 19);
        assert_eq!(attack.description, "longa");
    }

    #[test]
    fn missing_fields_default() {
        let attack: Attack = serde_json::from_value(json!({ "nome": "Soco", "attr": "" })).unwrap();
        assert_eq!(attack.attr, None);
        assert_eq!(attack.crit_rule(), CritRule::default());
        assert!(attack.damage_expr().is_none());
    }

    #[test]
    fn unknown_attr_loads_as_none_and_round_trips() {
        for raw in [json!("DES"), json!(3), json!(["FOR"])] {
            let attack: Attack =
                serde_json::from_value(json!({ "nome": "Arco", "dano": "1d8", "attr": raw })).unwrap();
            assert_eq!(attack.attr, None);
            assert_eq!(attack.unresolved_attr, Some(raw.clone()));
            assert_eq!(serde_json::to_value(&attack).unwrap()["attr"], raw);
        }
    }

    #[test]
    fn known_attr_is_case_insensitive() {
        let attack: Attack = serde_json::from_value(json!({ "attr": " agi " })).unwrap();
        assert_eq!(attack.attr, Some(Attribute::Agility));
        assert_eq!(attack.unresolved_attr, None);
        assert_eq!(serde_json::to_value(&attack).unwrap()["attr"], json!("AGI"));
    }

    #[test]
    fn patching_attr_clears_unresolved_value() {
        let mut attack: Attack = serde_json::from_value(json!({ "attr": "DES" })).unwrap();
        attack.apply(&AttackPatch {
            attr: Some(Attribute::Agility),
            ..AttackPatch::default()
        });
        assert_eq!(attack.attr, Some(Attribute::Agility));
        assert_eq!(attack.unresolved_attr, None);
    }

    #[test]
    fn patch_touches_only_given_fields() {
        let mut attack = Attack::new(1);
        attack.apply(&AttackPatch {
            damage: Some("2d6".to_string()),
            attr: Some(Attribute::Agility),
            ..AttackPatch::default()
        });
        assert_eq!(attack.damage, "2d6");
        assert_eq!(attack.attr, Some(Attribute::Agility));
        assert_eq!(attack.name, "Novo Ataque");
    }

    #[test]
    fn attack_ids_are_timestamps() {
        assert!(new_attack_id() > 1_600_000_000_000);
    }
}
