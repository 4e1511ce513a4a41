//! Deterministic combat rules for flashcard battles.
//!
//! `battle-core` defines the canonical rules (turn resolution, equipment
//! effects, boss phases, rewards) and exposes pure APIs that are reused by
//! the session controller and offline tools. Every function here is total
//! and side-effect free; randomness enters only through [`env::CritRng`].
pub mod boss;
pub mod combat;
pub mod config;
pub mod effects;
pub mod env;
pub mod error;
pub mod rewards;
pub mod state;
pub mod types;

pub use boss::{BossPhase, current_phase, has_phase_changed, phase_index};
pub use combat::{CombatOutcome, TurnModifiers, TurnResolution, is_combat_over, resolve_turn};
pub use config::BattleConfig;
pub use effects::{
    EffectKind, EquipmentEffects, EquippedItem, ParsedSpecialEffect, parse_equipment_effects,
    parse_special_effect,
};
pub use env::{
    AnswerClassifier, BossPhaseOracle, CritRng, FixedRoll, LootSource, NoBossPhases, PcgRng,
};
pub use error::{BattleError, ErrorSeverity};
pub use rewards::{CombatRewards, get_combat_rewards, quality_multiplier};
pub use state::{
    AbilityEffectKind, ActiveAbilityEffect, ActiveEffects, CombatAction, CombatEvent, CombatState,
    Enemy, EnemyTier, QualityCounts,
};
pub use types::{AnswerQuality, CardId, ConfidenceLevel, EvolutionTier, RetrievalMode};
