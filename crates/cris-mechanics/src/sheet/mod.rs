//! Character sheets (fichas): profile, attributes, status bars, defense,
//! skills and attacks.
//!
//! A sheet reads the JSON document the sheet backend stores. Every field
//! is optional, so `{}` is the default sheet, and keys this crate does not
//! know about are carried through unchanged.

pub mod attack;
pub mod attribute;
pub mod coerce;
pub mod merge;
pub mod skill;
pub mod track;

pub use attack::{Attack, AttackPatch, new_attack_id};
pub use attribute::{Attribute, AttributeMap};
pub use skill::{Skill, SkillList, TRAINING_LADDER};
pub use track::StatusBar;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MechError, MechResult};

/// Who the character is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Character name.
    #[serde(rename = "nome", default)]
    pub name: String,
    /// Origin.
    #[serde(rename = "origem", default)]
    pub origin: String,
    /// Player name.
    #[serde(rename = "jogador", default)]
    pub player: String,
    /// Class.
    #[serde(rename = "classe", default)]
    pub class: String,
}

/// Defense values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defense {
    /// Defense score.
    #[serde(default = "default_defense", deserialize_with = "coerce::lenient_int")]
    pub def: i64,
    /// Block.
    #[serde(rename = "bloqueio", default, deserialize_with = "coerce::lenient_int")]
    pub block: i64,
    /// Dodge.
    #[serde(rename = "esquiva", default, deserialize_with = "coerce::lenient_int")]
    pub dodge: i64,
}

fn default_defense() -> i64 {
    10
}

impl Default for Defense {
    fn default() -> Self {
        Self {
            def: default_defense(),
            block: 0,
            dodge: 0,
        }
    }
}

/// A complete character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSheet {
    /// Name, origin, player, class.
    pub profile: Profile,
    /// Attribute values.
    #[serde(rename = "attrs")]
    pub attributes: AttributeMap,
    /// Hit points (PV).
    pub hp: StatusBar,
    /// Sanity (SAN).
    pub san: StatusBar,
    /// Effort points (PE).
    pub esf: StatusBar,
    /// Defense, block and dodge.
    #[serde(rename = "def")]
    pub defense: Defense,
    /// Skills.
    #[serde(rename = "pericias")]
    pub skills: SkillList,
    /// Attacks.
    #[serde(rename = "ataques")]
    pub attacks: Vec<Attack>,
    /// Document keys this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            attributes: AttributeMap::default(),
            hp: StatusBar::default(),
            san: StatusBar::default(),
            esf: StatusBar::default(),
            defense: Defense::default(),
            skills: SkillList::standard(),
            attacks: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl CharacterSheet {
    /// A default sheet for a named character.
    pub fn new(name: impl Into<String>) -> Self {
        let mut sheet = Self::default();
        sheet.profile.name = name.into();
        sheet
    }

    /// Read a sheet from its JSON document.
    pub fn from_json(json: &str) -> MechResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a sheet from an already parsed JSON value.
    pub fn from_value(value: Value) -> MechResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Write the sheet as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> MechResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The sheet as a JSON value.
    pub fn to_value(&self) -> MechResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Value of one attribute.
    pub fn attribute(&self, attr: Attribute) -> i32 {
        self.attributes.get(attr)
    }

    /// Set one attribute.
    pub fn set_attribute(&mut self, attr: Attribute, value: i32) {
        self.attributes.set(attr, value);
    }

    /// Look up a skill by exact name.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    fn skill_mut(&mut self, name: &str) -> MechResult<&mut Skill> {
        self.skills
            .get_mut(name)
            .ok_or_else(|| MechError::UnknownSkill(name.to_string()))
    }

    /// Change the attribute a skill rolls with.
    pub fn set_skill_attr(&mut self, name: &str, attr: Attribute) -> MechResult<()> {
        self.skill_mut(name)?.attr = attr;
        Ok(())
    }

    /// Set a skill's training from typed text.
    pub fn set_skill_training(&mut self, name: &str, raw: &str) -> MechResult<()> {
        self.skill_mut(name)?.training = coerce::parse_num(raw);
        Ok(())
    }

    /// Set a skill's other bonus from typed text.
    pub fn set_skill_other(&mut self, name: &str, raw: &str) -> MechResult<()> {
        self.skill_mut(name)?.other = coerce::parse_num(raw);
        Ok(())
    }

    /// Find an attack by numeric id or, failing that, by exact name.
    pub fn attack(&self, key: &str) -> Option<&Attack> {
        let key = key.trim();
        key.parse::<i64>()
            .ok()
            .and_then(|id| self.attacks.iter().find(|a| a.id == id))
            .or_else(|| self.attacks.iter().find(|a| a.name == key))
    }

    /// Append a default attack with the given id and return it.
    pub fn add_attack(&mut self, id: i64) -> &mut Attack {
        let index = self.attacks.len();
        self.attacks.push(Attack::new(id));
        &mut self.attacks[index]
    }

    /// Update the attack at `index` with the fields set in `patch`.
    pub fn update_attack(&mut self, index: usize, patch: &AttackPatch) -> MechResult<()> {
        let len = self.attacks.len();
        let attack = self
            .attacks
            .get_mut(index)
            .ok_or(MechError::AttackIndex { index, len })?;
        attack.apply(patch);
        Ok(())
    }

    /// Remove the attack with the given id.
    pub fn remove_attack(&mut self, id: i64) -> MechResult<Attack> {
        let index = self
            .attacks
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| MechError::UnknownAttack(id.to_string()))?;
        Ok(self.attacks.remove(index))
    }

    /// Deep-merge a partial JSON document into this sheet.
    ///
    /// The sheet is left untouched if the patch is not an object or the
    /// merged document is no longer a valid sheet.
    pub fn apply_patch(&mut self, patch: &Value) -> MechResult<()> {
        if !patch.is_object() {
            return Err(MechError::InvalidPatch(
                "patch must be a JSON object".to_string(),
            ));
        }
        let mut document = self.to_value()?;
        merge::deep_merge(&mut document, patch);
        *self = Self::from_value(document).map_err(|e| MechError::InvalidPatch(e.to_string()))?;
        tracing::debug!(name = %self.profile.name, "patch applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_is_default_sheet() {
        let sheet = CharacterSheet::from_json("{}").unwrap();
        assert_eq!(sheet, CharacterSheet::default());
        assert_eq!(sheet.skills.len(), 28);
        assert_eq!(sheet.hp.to_string(), "10/10");
        assert_eq!(sheet.defense.def, 10);
        assert!(sheet.attacks.is_empty());
    }

    #[test]
    fn reads_full_document() {
        let sheet = CharacterSheet::from_value(json!({
            "profile": { "nome": "Arthur", "classe": "Combatente" },
            "attrs": { "FOR": 2, "AGI": 1, "INT": 0, "PRE": -1, "VIG": 3 },
            "hp": { "atual": 7, "max": 20 },
            "def": { "def": 14, "bloqueio": 2, "esquiva": 1 },
            "pericias": [{ "name": "Luta", "attr": "FOR", "treino": 10, "outros": 0 }],
            "ataques": [{ "id": 1, "nome": "Espada", "dano": "1d8+2", "crit": "19/x2", "attr": "FOR", "skill": "Luta" }]
        }))
        .unwrap();
        assert_eq!(sheet.profile.class, "Combatente");
        assert_eq!(sheet.attribute(Attribute::Vigor), 3);
        assert_eq!(sheet.hp.current, 7);
        assert_eq!(sheet.san, StatusBar::default());
        assert_eq!(sheet.defense.block, 2);
        assert_eq!(sheet.skills.len(), 1);
        assert_eq!(sheet.attack("Espada").unwrap().id, 1);
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let sheet = CharacterSheet::from_value(json!({ "inventario": ["corda"] })).unwrap();
        let value = sheet.to_value().unwrap();
        assert_eq!(value["inventario"], json!(["corda"]));
    }

    #[test]
    fn skill_edits() {
        let mut sheet = CharacterSheet::new("Ana");
        sheet.set_skill_training("Luta", "15").unwrap();
        sheet.set_skill_other("Luta", "+2 anel").unwrap();
        sheet.set_skill_attr("Luta", Attribute::Agility).unwrap();
        let luta = sheet.skill("Luta").unwrap();
        assert_eq!(luta.bonus(), 17);
        assert_eq!(luta.attr, Attribute::Agility);
        assert!(matches!(
            sheet.set_skill_training("Voo", "5"),
            Err(MechError::UnknownSkill(_))
        ));
    }

    #[test]
    fn attack_lifecycle() {
        let mut sheet = CharacterSheet::new("Ana");
        sheet.add_attack(100).name = "Faca".to_string();
        sheet.add_attack(200);
        assert_eq!(sheet.attack("100").unwrap().name, "Faca");
        assert_eq!(sheet.attack("Novo Ataque").unwrap().id, 200);

        sheet
            .update_attack(
                1,
                &AttackPatch {
                    crit: Some("18/x3".to_string()),
                    ..AttackPatch::default()
                },
            )
            .unwrap();
        assert_eq!(sheet.attacks[1].crit_rule().multiplier, 3);
        assert!(sheet.update_attack(5, &AttackPatch::default()).is_err());

        let removed = sheet.remove_attack(100).unwrap();
        assert_eq!(removed.name, "Faca");
        assert_eq!(sheet.attacks.len(), 1);
        assert!(sheet.remove_attack(100).is_err());
    }

    #[test]
    fn patch_merges_deeply() {
        let mut sheet = CharacterSheet::new("Ana");
        sheet
            .apply_patch(&json!({ "attrs": { "AGI": 3 }, "hp": { "atual": 4 } }))
            .unwrap();
        assert_eq!(sheet.attribute(Attribute::Agility), 3);
        assert_eq!(sheet.hp.current, 4);
        assert_eq!(sheet.hp.max, 10);
        assert_eq!(sheet.profile.name, "Ana");
    }

    #[test]
    fn patch_replaces_lists() {
        let mut sheet = CharacterSheet::new("Ana");
        sheet
            .apply_patch(&json!({ "pericias": [{ "name": "Luta", "attr": "FOR", "treino": 5 }] }))
            .unwrap();
        assert_eq!(sheet.skills.len(), 1);
    }

    #[test]
    fn null_resets_field_to_default() {
        let mut sheet = CharacterSheet::new("Ana");
        sheet.hp.set_current(1);
        sheet.apply_patch(&json!({ "hp": null })).unwrap();
        assert_eq!(sheet.hp, StatusBar::default());
    }

    #[test]
    fn invalid_patch_leaves_sheet_untouched() {
        let mut sheet = CharacterSheet::new("Ana");
        let before = sheet.clone();
        assert!(sheet.apply_patch(&json!([1, 2])).is_err());
        assert!(
            sheet
                .apply_patch(&json!({ "pericias": [{ "name": "X", "attr": "BAD" }] }))
                .is_err()
        );
        assert_eq!(sheet, before);
    }
}
