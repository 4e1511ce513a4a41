//! Closed vocabularies describing one answered card.
//!
//! Every modifier axis is a closed enum so the multiplier tables in
//! [`crate::combat::tables`] are checked for exhaustiveness by the compiler.

/// Quality level assigned to an answer by the external classifier.
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
pub enum AnswerQuality {
    /// Fully correct, fluent recall.
    Perfect,
    /// Correct recall.
    Correct,
    /// Partially correct.
    Partial,
    /// Incorrect answer.
    Wrong,
    /// No answer before the time limit.
    Timeout,
}

impl AnswerQuality {
    /// Perfect and Correct answers count as correct for healing and wagers.
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Perfect | Self::Correct)
    }

    /// Wrong and Timeout answers hand the turn to the enemy.
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::Wrong | Self::Timeout)
    }
}

/// Self-reported confidence attached to an answer.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum ConfidenceLevel {
    /// Answered immediately without hesitation.
    Instant,
    /// Knew the answer after some thought.
    #[default]
    Knew,
    /// Guessed.
    Guess,
}

/// Cognitive retrieval style of the question.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum RetrievalMode {
    /// Plain front-to-back recall.
    #[default]
    Standard,
    /// Explain the concept back in your own words.
    Teach,
    /// Back-to-front recall.
    Reversed,
    /// Relate two concepts.
    Connect,
}

/// Mastery ranking of a flashcard (0-3).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EvolutionTier {
    #[default]
    Base,
    Evolved,
    Ascended,
    Legendary,
}

impl EvolutionTier {
    /// Maps a stored tier level to a tier.
    ///
    /// Levels outside 0-3 fall back to [`EvolutionTier::Base`] so a bad lookup
    /// never aborts turn resolution.
    pub const fn from_level(level: u8) -> Self {
        match level {
            1 => Self::Evolved,
            2 => Self::Ascended,
            3 => Self::Legendary,
            _ => Self::Base,
        }
    }

    pub const fn level(&self) -> u8 {
        match self {
            Self::Base => 0,
            Self::Evolved => 1,
            Self::Ascended => 2,
            Self::Legendary => 3,
        }
    }
}

/// Identifier of a flashcard within an encounter's queue.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CardId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_tier_falls_back_to_base() {
        assert_eq!(EvolutionTier::from_level(2), EvolutionTier::Ascended);
        assert_eq!(EvolutionTier::from_level(7), EvolutionTier::Base);
        assert_eq!(EvolutionTier::Legendary.level(), 3);
    }

    #[test]
    fn quality_parses_from_snake_case() {
        let quality: AnswerQuality = "timeout".parse().unwrap();
        assert_eq!(quality, AnswerQuality::Timeout);
        assert!(quality.is_miss());
        assert!(AnswerQuality::Perfect.is_correct());
        assert!(!AnswerQuality::Partial.is_correct());
        assert_eq!(RetrievalMode::Teach.as_ref(), "teach");
    }
}
