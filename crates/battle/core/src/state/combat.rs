use super::{CombatEvent, Enemy};
use crate::types::AnswerQuality;

/// Per-quality answer counters for one encounter.
///
/// Timeouts are folded into `wrong`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityCounts {
    pub perfect: u32,
    pub correct: u32,
    pub partial: u32,
    pub wrong: u32,
}

impl QualityCounts {
    pub const fn new(perfect: u32, correct: u32, partial: u32, wrong: u32) -> Self {
        Self {
            perfect,
            correct,
            partial,
            wrong,
        }
    }

    pub const fn total(&self) -> u32 {
        self.perfect + self.correct + self.partial + self.wrong
    }

    /// Returns a copy with the bucket for `quality` incremented.
    #[must_use]
    pub fn record(mut self, quality: AnswerQuality) -> Self {
        match quality {
            AnswerQuality::Perfect => self.perfect += 1,
            AnswerQuality::Correct => self.correct += 1,
            AnswerQuality::Partial => self.partial += 1,
            AnswerQuality::Wrong | AnswerQuality::Timeout => self.wrong += 1,
        }
        self
    }
}

/// Live numbers of one encounter.
///
/// # Invariants
///
/// - Replaced, never mutated, by [`crate::combat::resolve_turn`]
/// - `current_card_index` grows by exactly one per resolved turn
/// - `poison_damage` is pending damage for the *next* turn, not the current one
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub enemy: Enemy,
    pub player_hp: i32,
    pub player_max_hp: i32,
    pub current_card_index: u32,
    pub total_cards: u32,
    pub poison_damage: i32,
    pub counts: QualityCounts,
    pub log: Vec<CombatEvent>,
}

impl CombatState {
    /// Creates the state at encounter start.
    ///
    /// `starting_hp` is clamped to `player_max_hp`.
    pub fn new(enemy: Enemy, player_max_hp: i32, starting_hp: i32, total_cards: u32) -> Self {
        Self {
            enemy,
            player_hp: starting_hp.min(player_max_hp),
            player_max_hp,
            current_card_index: 0,
            total_cards,
            poison_damage: 0,
            counts: QualityCounts::default(),
            log: Vec::new(),
        }
    }

    /// Number of cards still waiting to be answered.
    pub fn cards_remaining(&self) -> u32 {
        self.total_cards.saturating_sub(self.current_card_index)
    }

    pub fn is_player_defeated(&self) -> bool {
        self.player_hp <= 0
    }

    /// Last event of the log, if any.
    pub fn last_event(&self) -> Option<&CombatEvent> {
        self.log.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EnemyTier;

    #[test]
    fn new_state_clamps_starting_hp() {
        let enemy = Enemy::new("Slime", EnemyTier::Common, 30, 4, 20, 10);
        let state = CombatState::new(enemy, 50, 80, 5);

        assert_eq!(state.player_hp, 50);
        assert_eq!(state.cards_remaining(), 5);
        assert_eq!(state.counts.total(), 0);
        assert!(state.log.is_empty());
    }

    #[test]
    fn timeout_is_recorded_as_wrong() {
        let counts = QualityCounts::default()
            .record(AnswerQuality::Timeout)
            .record(AnswerQuality::Perfect);

        assert_eq!(counts, QualityCounts::new(1, 0, 0, 1));
    }
}
