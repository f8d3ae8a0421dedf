//! The five C.R.I.S. attributes and the per-sheet attribute map.

use serde::{Deserialize, Serialize};

use super::coerce;
use crate::error::MechError;

/// A core character attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Attribute {
    /// Força (`FOR`).
    Strength,
    /// Agilidade (`AGI`).
    Agility,
    /// Intelecto (`INT`).
    Intellect,
    /// Presença (`PRE`).
    Presence,
    /// Vigor (`VIG`).
    Vigor,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Self; 5] = [
        Self::Strength,
        Self::Agility,
        Self::Intellect,
        Self::Presence,
        Self::Vigor,
    ];

    /// The three-letter code used in sheet documents.
    pub fn code(self) -> &'static str {
        match self {
            Self::Strength => "FOR",
            Self::Agility => "AGI",
            Self::Intellect => "INT",
            Self::Presence => "PRE",
            Self::Vigor => "VIG",
        }
    }

    /// The full name shown on the sheet.
    pub fn label(self) -> &'static str {
        match self {
            Self::Strength => "FORÇA",
            Self::Agility => "AGILIDADE",
            Self::Intellect => "INTELECTO",
            Self::Presence => "PRESENÇA",
            Self::Vigor => "VIGOR",
        }
    }
}

impl std::str::FromStr for Attribute {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| MechError::UnknownAttribute(code.to_string()))
    }
}

impl TryFrom<String> for Attribute {
    type Error = MechError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Attribute> for &'static str {
    fn from(attr: Attribute) -> Self {
        attr.code()
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Attribute values of one character. Missing codes read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMap {
    /// `FOR`
    #[serde(rename = "FOR", default, deserialize_with = "coerce::lenient_i32")]
    pub strength: i32,
    /// `AGI`
    #[serde(rename = "AGI", default, deserialize_with = "coerce::lenient_i32")]
    pub agility: i32,
    /// `INT`
    #[serde(rename = "INT", default, deserialize_with = "coerce::lenient_i32")]
    pub intellect: i32,
    /// `PRE`
    #[serde(rename = "PRE", default, deserialize_with = "coerce::lenient_i32")]
    pub presence: i32,
    /// `VIG`
    #[serde(rename = "VIG", default, deserialize_with = "coerce::lenient_i32")]
    pub vigor: i32,
}

impl AttributeMap {
    /// Value of one attribute.
    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intellect => self.intellect,
            Attribute::Presence => self.presence,
            Attribute::Vigor => self.vigor,
        }
    }

    /// Set one attribute.
    pub fn set(&mut self, attr: Attribute, value: i32) {
        let slot = match attr {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Intellect => &mut self.intellect,
            Attribute::Presence => &mut self.presence,
            Attribute::Vigor => &mut self.vigor,
        };
        *slot = value;
    }

    /// Iterate over `(attribute, value)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> {
        let map = *self;
        Attribute::ALL.into_iter().map(move |a| (a, map.get(a)))
    }
}
