//! Equipment special effects.
//!
//! Items carry free-text effect descriptions written by content authors.
//! [`parse_special_effect`] decodes the handful of phrasings the rules know
//! about; anything else becomes an inert [`EffectKind::Unknown`] so an
//! authoring typo never aborts an encounter.

mod aggregate;
mod parser;

pub use aggregate::EquipmentEffects;
pub use parser::{parse_equipment_effects, parse_special_effect};

/// Decoded equipment ability kind.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectKind {
    /// Flat damage added to perfect answers.
    BonusDamageOnPerfect,
    /// HP restored on correct or perfect answers.
    HealOnCorrect,
    /// Critical hits deal double damage.
    DoubleCritDamage,
    /// Percentage bonus to combat gold.
    GoldBonusPct,
    /// Unrecognized text. Inert.
    Unknown,
}

/// A decoded equipment ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedSpecialEffect {
    pub kind: EffectKind,
    pub value: i32,
    /// Name of the item the effect came from.
    pub source: String,
}

impl ParsedSpecialEffect {
    pub fn new(kind: EffectKind, value: i32, source: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            source: source.into(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == EffectKind::Unknown
    }
}

/// An equipped item as seen by the effect parser.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_effect: Option<String>,
}

impl EquippedItem {
    pub fn new(name: impl Into<String>, special_effect: Option<&str>) -> Self {
        Self {
            name: name.into(),
            special_effect: special_effect.map(str::to_owned),
        }
    }
}
