//! Skills (perícias) and the name-indexed skill list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Attribute, coerce};

/// Training values offered by the sheet.
pub const TRAINING_LADDER: [i64; 7] = [0, 5, 10, 15, 20, 25, 30];

/// A trained competency tied to one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name, unique within a sheet.
    #[serde(default)]
    pub name: String,
    /// Attribute that sizes this skill's dice pool.
    pub attr: Attribute,
    /// Training bonus.
    #[serde(rename = "treino", default, deserialize_with = "coerce::lenient_int")]
    pub training: i64,
    /// Any other bonus.
    #[serde(rename = "outros", default, deserialize_with = "coerce::lenient_int")]
    pub other: i64,
}

impl Skill {
    /// Create an untrained skill.
    pub fn new(name: impl Into<String>, attr: Attribute) -> Self {
        Self {
            name: name.into(),
            attr,
            training: 0,
            other: 0,
        }
    }

    /// Total additive bonus applied to rolls of this skill.
    pub fn bonus(&self) -> i64 {
        self.training.saturating_add(self.other)
    }
}

/// The skills on a sheet, indexed by name.
///
/// Order is preserved. If two entries share a name, lookups return the
/// first one; [`SkillList::duplicates`] reports the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Skill>", into = "Vec<Skill>")]
pub struct SkillList {
    skills: Vec<Skill>,
    index: HashMap<String, usize>,
}

impl SkillList {
    /// The standard C.R.I.S. skill list, all untrained.
    pub fn standard() -> Self {
        use Attribute::{Agility, Intellect, Presence, Strength, Vigor};

        [
            ("Acrobacia", Agility),
            ("Adestramento*", Presence),
            ("Artes*", Presence),
            ("Atletismo", Strength),
            ("Atualidades", Intellect),
            ("Ciências*", Intellect),
            ("Crime*", Agility),
            ("Diplomacia", Presence),
            ("Enganação*", Presence),
            ("Fortitude", Vigor),
            ("Furtividade*", Agility),
            ("Iniciativa", Agility),
            ("Intimidação", Presence),
            ("Intuição", Presence),
            ("Investigação", Intellect),
            ("Luta", Strength),
            ("Medicina", Intellect),
            ("Ocultismo*", Intellect),
            ("Percepção*", Presence),
            ("Pilotagem*", Agility),
            ("Pontaria", Agility),
            ("Profissão*", Intellect),
            ("Reflexos", Agility),
            ("Religião*", Intellect),
            ("Sobrevivência", Intellect),
            ("Tática*", Intellect),
            ("Tecnologia*", Intellect),
            ("Vontade", Presence),
        ]
        .into_iter()
        .map(|(name, attr)| Skill::new(name, attr))
        .collect::<Vec<_>>()
        .into()
    }

    /// Look up a skill by exact name.
    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.index.get(name).map(|&i| &self.skills[i])
    }

    /// Look up a skill by exact name for editing.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Skill> {
        let i = *self.index.get(name)?;
        self.skills.get_mut(i)
    }

    /// Append a skill. A skill whose name is already taken is kept but
    /// not reachable by name.
    pub fn push(&mut self, skill: Skill) {
        self.index
            .entry(skill.name.clone())
            .or_insert(self.skills.len());
        self.skills.push(skill);
    }

    /// Iterate over skills in sheet order.
    pub fn iter(&self) -> std::slice::Iter<'_, Skill> {
        self.skills.iter()
    }

    /// Number of skills, duplicates included.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Returns true if the list has no skills.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Names that appear more than once, in first-seen order.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut dups = Vec::new();
        for skill in &self.skills {
            let count = seen.entry(skill.name.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                dups.push(skill.name.as_str());
            }
        }
        dups
    }
}

impl From<Vec<Skill>> for SkillList {
    fn from(skills: Vec<Skill>) -> Self {
        let mut index = HashMap::with_capacity(skills.len());
        for (i, skill) in skills.iter().enumerate() {
            index.entry(skill.name.clone()).or_insert(i);
        }
        Self { skills, index }
    }
}

impl From<SkillList> for Vec<Skill> {
    fn from(list: SkillList) -> Self {
        list.skills
    }
}

impl<'a> IntoIterator for &'a SkillList {
    type Item = &'a Skill;
    type IntoIter = std::slice::Iter<'a, Skill>;

    fn into_iter(self) -> Self::IntoIter {
        self.skills.iter()
    }
}
