//! Errors for rejected session commands.

use battle_core::{BattleError, ErrorSeverity};

use crate::abilities::AbilityId;

/// A command the current encounter cannot accept.
///
/// Rejections never change session state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("encounter is over")]
    EncounterOver,

    #[error("encounter is still in progress")]
    EncounterOngoing,

    #[error("a wager of {stake} gold is already placed")]
    WagerAlreadyPlaced { stake: u32 },

    #[error("insufficient gold: stake {stake}, available {available}")]
    InsufficientGold { stake: u32, available: u32 },

    #[error("ability '{ability}' is cooling down for {remaining} more turns")]
    AbilityOnCooldown { ability: AbilityId, remaining: u32 },

    #[error("insufficient spell points: need {needed}, have {available}")]
    InsufficientSpellPoints { needed: u32, available: u32 },

    #[error("too many active ability effects")]
    TooManyActiveEffects,
}

impl BattleError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AbilityOnCooldown { .. }
            | Self::InsufficientSpellPoints { .. }
            | Self::TooManyActiveEffects => ErrorSeverity::Recoverable,
            Self::NothingToUndo
            | Self::EncounterOver
            | Self::EncounterOngoing
            | Self::WagerAlreadyPlaced { .. }
            | Self::InsufficientGold { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NothingToUndo => "nothing_to_undo",
            Self::EncounterOver => "encounter_over",
            Self::EncounterOngoing => "encounter_ongoing",
            Self::WagerAlreadyPlaced { .. } => "wager_already_placed",
            Self::InsufficientGold { .. } => "insufficient_gold",
            Self::AbilityOnCooldown { .. } => "ability_on_cooldown",
            Self::InsufficientSpellPoints { .. } => "insufficient_spell_points",
            Self::TooManyActiveEffects => "too_many_active_effects",
        }
    }
}
