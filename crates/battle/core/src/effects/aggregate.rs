use super::{EffectKind, ParsedSpecialEffect};

/// Totals of every parsed effect, summed per kind.
///
/// Values of the same kind stack additively, saturating at `i32::MAX`.
/// Double crit damage does not stack: any number of sources doubles critical damage once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentEffects {
    pub bonus_damage_on_perfect: i32,
    pub heal_on_correct: i32,
    pub double_crit_damage: bool,
    pub gold_bonus_pct: i32,
}

impl EquipmentEffects {
    pub fn aggregate(effects: &[ParsedSpecialEffect]) -> Self {
        effects.iter().fold(Self::default(), |mut totals, effect| {
            match effect.kind {
                EffectKind::BonusDamageOnPerfect => {
                    totals.bonus_damage_on_perfect =
                        totals.bonus_damage_on_perfect.saturating_add(effect.value);
                }
                EffectKind::HealOnCorrect => {
                    totals.heal_on_correct = totals.heal_on_correct.saturating_add(effect.value);
                }
                EffectKind::DoubleCritDamage => totals.double_crit_damage = true,
                EffectKind::GoldBonusPct => {
                    totals.gold_bonus_pct = totals.gold_bonus_pct.saturating_add(effect.value);
                }
                EffectKind::Unknown => {}
            }
            totals
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_kind_effects_sum() {
        let effects = [
            ParsedSpecialEffect::new(EffectKind::GoldBonusPct, 10, "Purse"),
            ParsedSpecialEffect::new(EffectKind::GoldBonusPct, 5, "Ring"),
            ParsedSpecialEffect::new(EffectKind::HealOnCorrect, 3, "Amulet"),
            ParsedSpecialEffect::new(EffectKind::Unknown, 99, "Rock"),
        ];

        let totals = EquipmentEffects::aggregate(&effects);

        assert_eq!(totals.gold_bonus_pct, 15);
        assert_eq!(totals.heal_on_correct, 3);
        assert_eq!(totals.bonus_damage_on_perfect, 0);
        assert!(!totals.double_crit_damage);
    }

    #[test]
    fn huge_values_saturate() {
        let effects = [
            ParsedSpecialEffect::new(EffectKind::BonusDamageOnPerfect, i32::MAX, "Quill"),
            ParsedSpecialEffect::new(EffectKind::BonusDamageOnPerfect, 3, "Pen"),
        ];

        let totals = EquipmentEffects::aggregate(&effects);

        assert_eq!(totals.bonus_damage_on_perfect, i32::MAX);
    }
}
