//! Encounter rewards.

use crate::effects::{EquipmentEffects, ParsedSpecialEffect};
use crate::state::{CombatState, Enemy, QualityCounts};

/// Final XP and gold of an encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatRewards {
    pub xp: u32,
    pub gold: u32,
}

/// Answer weights used by [`quality_multiplier`].
const PERFECT_WEIGHT: f64 = 1.5;
const CORRECT_WEIGHT: f64 = 1.0;
const PARTIAL_WEIGHT: f64 = 0.5;
const WRONG_WEIGHT: f64 = 0.25;

/// Weighted average answer quality. Zero answers yield 0, never NaN.
pub fn quality_multiplier(counts: &QualityCounts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }
    let weighted = f64::from(counts.perfect) * PERFECT_WEIGHT
        + f64::from(counts.correct) * CORRECT_WEIGHT
        + f64::from(counts.partial) * PARTIAL_WEIGHT
        + f64::from(counts.wrong) * WRONG_WEIGHT;
    weighted / f64::from(total)
}

/// Converts an encounter's answer statistics into XP and gold.
///
/// # Formula
///
/// ```text
/// xp   = floor(xp_reward × quality × (1 + (streak% + xp%) / 100))
/// gold = floor(gold_reward × (1 + (gold% + equipment gold%) / 100))
/// ```
///
/// Gold is scaled only by percentage bonuses, never by answer quality.
pub fn get_combat_rewards(
    state: &CombatState,
    enemy: &Enemy,
    streak_bonus_pct: i32,
    xp_bonus_pct: i32,
    gold_bonus_pct: i32,
    effects: &[ParsedSpecialEffect],
) -> CombatRewards {
    let quality = quality_multiplier(&state.counts);
    let xp_scale = 1.0 + (f64::from(streak_bonus_pct) + f64::from(xp_bonus_pct)) / 100.0;
    let xp = (f64::from(enemy.xp_reward) * quality * xp_scale).floor();

    let equipment_gold_pct = EquipmentEffects::aggregate(effects).gold_bonus_pct;
    let gold_scale = 1.0 + (f64::from(gold_bonus_pct) + f64::from(equipment_gold_pct)) / 100.0;
    let gold = (f64::from(enemy.gold_reward) * gold_scale).floor();

    CombatRewards {
        xp: xp.max(0.0) as u32,
        gold: gold.max(0.0) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{EffectKind, parse_special_effect};
    use crate::state::EnemyTier;

    fn enemy() -> Enemy {
        Enemy::new("Librarian", EnemyTier::Elite, 80, 6, 100, 50)
    }

    fn state_with(counts: QualityCounts) -> CombatState {
        let mut state = CombatState::new(enemy(), 60, 60, counts.total());
        state.counts = counts;
        state
    }

    #[test]
    fn mixed_answers_with_bonuses() {
        let state = state_with(QualityCounts::new(2, 1, 1, 1));

        let rewards = get_combat_rewards(&state, &enemy(), 10, 5, 10, &[]);

        assert_eq!(rewards, CombatRewards { xp: 109, gold: 55 });
    }

    #[test]
    fn zero_answers_give_zero_xp_but_full_gold() {
        let state = state_with(QualityCounts::default());

        let rewards = get_combat_rewards(&state, &enemy(), 0, 0, 0, &[]);

        assert_eq!(quality_multiplier(&state.counts), 0.0);
        assert_eq!(rewards, CombatRewards { xp: 0, gold: 50 });
    }

    #[test]
    fn equipment_gold_bonuses_stack() {
        let state = state_with(QualityCounts::new(1, 0, 0, 0));
        let effects = [
            ParsedSpecialEffect::new(EffectKind::GoldBonusPct, 10, "Purse"),
            ParsedSpecialEffect::new(EffectKind::GoldBonusPct, 20, "Ring"),
            ParsedSpecialEffect::new(EffectKind::HealOnCorrect, 50, "Amulet"),
        ];

        let rewards = get_combat_rewards(&state, &enemy(), 0, 0, 0, &effects);

        assert_eq!(rewards.gold, 65);
        assert_eq!(rewards.xp, 150);
    }

    #[test]
    fn oversized_gold_bonus_does_not_overflow() {
        let state = state_with(QualityCounts::new(1, 0, 0, 0));
        let effects = [
            parse_special_effect("+2147483647% gold from combat", "Dragon Hoard"),
            parse_special_effect("+1% gold from combat", "Coin"),
        ];

        let rewards = get_combat_rewards(&state, &enemy(), i32::MAX, i32::MAX, 0, &effects);

        assert_eq!(effects[0].value, i32::MAX);
        assert_eq!(
            EquipmentEffects::aggregate(&effects).gold_bonus_pct,
            i32::MAX
        );
        assert!(rewards.gold > 1_000_000_000);
        assert_eq!(rewards.xp, u32::MAX);
    }
}
