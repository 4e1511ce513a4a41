//! Modifier tables for the damage formula.
//!
//! ```text
//! base        Perfect {Instant 2.5, Knew 2.0, Guess 1.0}
//!             Correct {Instant 1.5, Knew 1.0, Guess 0.5}
//!             Partial 0.5 (confidence ignored)
//! tier        {0: 1.0, 1: 1.25, 2: 1.5, 3: 2.0}
//! tier crit   {0: +0, 1: +0, 2: +10, 3: +25} percentage points
//! mode        {Standard 1.0, Teach 1.5, Reversed 1.1, Connect 1.2}
//! ```

use crate::types::{AnswerQuality, ConfidenceLevel, EvolutionTier, RetrievalMode};

/// Multiplier added on top of the base multiplier by a critical hit.
pub const CRIT_BONUS_MULTIPLIER: f64 = 0.5;

/// Base damage multiplier of an offensive answer.
///
/// Returns `None` for Wrong and Timeout, which never deal damage.
pub const fn base_multiplier(quality: AnswerQuality, confidence: ConfidenceLevel) -> Option<f64> {
    let multiplier = match (quality, confidence) {
        (AnswerQuality::Perfect, ConfidenceLevel::Instant) => 2.5,
        (AnswerQuality::Perfect, ConfidenceLevel::Knew) => 2.0,
        (AnswerQuality::Perfect, ConfidenceLevel::Guess) => 1.0,
        (AnswerQuality::Correct, ConfidenceLevel::Instant) => 1.5,
        (AnswerQuality::Correct, ConfidenceLevel::Knew) => 1.0,
        (AnswerQuality::Correct, ConfidenceLevel::Guess) => 0.5,
        (AnswerQuality::Partial, _) => 0.5,
        (AnswerQuality::Wrong | AnswerQuality::Timeout, _) => return None,
    };
    Some(multiplier)
}

pub const fn tier_multiplier(tier: EvolutionTier) -> f64 {
    match tier {
        EvolutionTier::Base => 1.0,
        EvolutionTier::Evolved => 1.25,
        EvolutionTier::Ascended => 1.5,
        EvolutionTier::Legendary => 2.0,
    }
}

/// Crit chance bonus in percentage points.
pub const fn tier_crit_bonus(tier: EvolutionTier) -> i32 {
    match tier {
        EvolutionTier::Base | EvolutionTier::Evolved => 0,
        EvolutionTier::Ascended => 10,
        EvolutionTier::Legendary => 25,
    }
}

pub const fn mode_multiplier(mode: RetrievalMode) -> f64 {
    match mode {
        RetrievalMode::Standard => 1.0,
        RetrievalMode::Teach => 1.5,
        RetrievalMode::Reversed => 1.1,
        RetrievalMode::Connect => 1.2,
    }
}
