//! Turn resolution: one answered card in, one fresh combat state out.

use crate::config::BattleConfig;
use crate::effects::{EffectKind, EquipmentEffects, ParsedSpecialEffect};
use crate::env::CritRng;
use crate::state::{CombatAction, CombatEvent, CombatState};
use crate::types::{AnswerQuality, ConfidenceLevel, EvolutionTier, RetrievalMode};

use super::tables::{
    CRIT_BONUS_MULTIPLIER, base_multiplier, mode_multiplier, tier_crit_bonus, tier_multiplier,
};

/// Optional modifiers of a turn.
///
/// Missing confidence, tier and mode fall back to `Knew`, tier 0 and
/// `Standard`, which is also what a failed progression lookup should pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnModifiers<'a> {
    pub confidence: Option<ConfidenceLevel>,
    pub tier: Option<EvolutionTier>,
    pub mode: Option<RetrievalMode>,
    pub effects: &'a [ParsedSpecialEffect],
    /// Scales the enemy's attack before defense is subtracted (boss phases).
    pub enemy_damage_multiplier: f64,
}

impl Default for TurnModifiers<'_> {
    fn default() -> Self {
        Self {
            confidence: None,
            tier: None,
            mode: None,
            effects: &[],
            enemy_damage_multiplier: 1.0,
        }
    }
}

impl<'a> TurnModifiers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.confidence = Some(confidence);
        self
    }

    #[must_use]
    pub fn with_tier(mut self, tier: EvolutionTier) -> Self {
        self.tier = Some(tier);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RetrievalMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: &'a [ParsedSpecialEffect]) -> Self {
        self.effects = effects;
        self
    }

    #[must_use]
    pub fn with_enemy_damage_multiplier(mut self, multiplier: f64) -> Self {
        self.enemy_damage_multiplier = multiplier;
        self
    }
}

/// Result of resolving one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnResolution {
    /// Fresh state after the turn. Its log already contains every event below.
    pub state: CombatState,
    /// The primary event of the turn.
    pub event: CombatEvent,
    /// Equipment activations, in firing order.
    pub activations: Vec<CombatEvent>,
    /// Pending poison that landed before the answer was processed.
    pub poison_tick: Option<i32>,
    pub critical: bool,
}

/// Resolves one answered card into a combat turn.
///
/// # Order
///
/// ```text
/// 1. pending poison lands, pending value resets to 0
/// 2. Wrong/Timeout: player takes max(1, floor(attack × phase) − defense)
///    Timeout also sets pending poison for the next turn
/// 3. Perfect/Correct/Partial:
///    crit     = (Perfect|Correct) && roll < (crit% + tier crit) / 100
///    mult     = base(quality, confidence) + 0.5 if crit
///    damage   = floor(attack × mult × tier × mode)
///             + perfect bonus (Perfect only)
///             × 2 if crit and double-crit equipped
/// 4. Perfect/Correct: heal-on-correct, capped at max HP
/// 5. one primary event, one activation event per fired equipment effect
/// 6. card index +1, counter for the original quality
/// ```
///
/// The roll source is consulted only on Perfect and Correct turns. Enemy HP
/// is not clamped at zero. `state` is never modified.
pub fn resolve_turn(
    state: &CombatState,
    quality: AnswerQuality,
    attack_power: i32,
    defense: i32,
    crit_chance_percent: i32,
    rng: &mut (impl CritRng + ?Sized),
    modifiers: &TurnModifiers<'_>,
) -> TurnResolution {
    let mut next = state.clone();
    let totals = EquipmentEffects::aggregate(modifiers.effects);

    // 1. Pending status effect from the previous turn
    let poison_tick = (state.poison_damage > 0).then_some(state.poison_damage);
    if let Some(poison) = poison_tick {
        next.player_hp = next.player_hp.saturating_sub(poison);
        next.poison_damage = 0;
        next.log.push(CombatEvent::new(
            CombatAction::PoisonTick,
            poison,
            format!("Poison deals {poison} damage."),
        ));
    }

    let mut activations = Vec::new();
    let mut critical = false;

    // 2-3. Outcome branch
    let event = match base_multiplier(quality, modifiers.confidence.unwrap_or_default()) {
        None => {
            let damage = enemy_damage(state.enemy.attack, defense, modifiers);
            next.player_hp = next.player_hp.saturating_sub(damage);
            if quality == AnswerQuality::Timeout {
                next.poison_damage = BattleConfig::POISON_DAMAGE;
                CombatEvent::new(
                    CombatAction::EnemyPoison,
                    damage,
                    format!(
                        "Time ran out! {} strikes for {damage} damage and poisons you.",
                        state.enemy.name
                    ),
                )
            } else {
                CombatEvent::new(
                    CombatAction::EnemyAttack,
                    damage,
                    format!("{} strikes for {damage} damage.", state.enemy.name),
                )
            }
        }
        Some(base) => {
            let tier = modifiers.tier.unwrap_or_default();
            let mode = modifiers.mode.unwrap_or_default();

            if quality.is_correct() {
                let chance =
                    f64::from(crit_chance_percent.saturating_add(tier_crit_bonus(tier))) / 100.0;
                critical = rng.roll() < chance;
            }

            let multiplier = if critical {
                base + CRIT_BONUS_MULTIPLIER
            } else {
                base
            };
            let scaled = f64::from(attack_power.max(0))
                * multiplier
                * tier_multiplier(tier)
                * mode_multiplier(mode);
            let mut damage = scaled.floor() as i32;

            if quality == AnswerQuality::Perfect {
                for effect in fired(modifiers.effects, EffectKind::BonusDamageOnPerfect) {
                    activations.push(CombatEvent::new(
                        CombatAction::EquipmentBonusDamage,
                        effect.value,
                        format!("{} adds {} bonus damage.", effect.source, effect.value),
                    ));
                }
                damage = damage.saturating_add(totals.bonus_damage_on_perfect);
            }

            if critical && totals.double_crit_damage {
                if let Some(effect) = fired(modifiers.effects, EffectKind::DoubleCritDamage).next()
                {
                    activations.push(CombatEvent::new(
                        CombatAction::EquipmentDoubleCrit,
                        damage,
                        format!("{} doubles the critical hit.", effect.source),
                    ));
                }
                damage = damage.saturating_mul(2);
            }

            next.enemy.hp = next.enemy.hp.saturating_sub(damage);

            let glancing = quality == AnswerQuality::Partial
                || modifiers.confidence == Some(ConfidenceLevel::Guess);
            let enemy = &state.enemy.name;
            if critical {
                CombatEvent::new(
                    CombatAction::PlayerCritical,
                    damage,
                    format!("Critical hit! {enemy} takes {damage} damage."),
                )
            } else if glancing {
                CombatEvent::new(
                    CombatAction::PlayerGlancing,
                    damage,
                    format!("A glancing blow. {enemy} takes {damage} damage."),
                )
            } else {
                CombatEvent::new(
                    CombatAction::PlayerAttack,
                    damage,
                    format!("You strike {enemy} for {damage} damage."),
                )
            }
        }
    };

    // 4. Heal-on-correct
    if quality.is_correct() && totals.heal_on_correct != 0 {
        next.player_hp = next
            .player_hp
            .saturating_add(totals.heal_on_correct)
            .min(next.player_max_hp);
        for effect in fired(modifiers.effects, EffectKind::HealOnCorrect) {
            activations.push(CombatEvent::new(
                CombatAction::EquipmentHeal,
                effect.value,
                format!("{} heals you for {} HP.", effect.source, effect.value),
            ));
        }
    }

    // 5. Event emission
    next.log.push(event.clone());
    next.log.extend(activations.iter().cloned());

    // 6. Progress
    next.current_card_index += 1;
    next.counts = next.counts.record(quality);

    TurnResolution {
        state: next,
        event,
        activations,
        poison_tick,
        critical,
    }
}

/// Damage a missed answer lets through.
fn enemy_damage(attack: i32, defense: i32, modifiers: &TurnModifiers<'_>) -> i32 {
    let scaled = (f64::from(attack) * modifiers.enemy_damage_multiplier).floor() as i32;
    scaled
        .saturating_sub(defense)
        .max(BattleConfig::MIN_ENEMY_DAMAGE)
}

fn fired(
    effects: &[ParsedSpecialEffect],
    kind: EffectKind,
) -> impl Iterator<Item = &ParsedSpecialEffect> {
    effects.iter().filter(move |e| e.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::parse_special_effect;
    use crate::env::FixedRoll;
    use crate::state::{Enemy, EnemyTier};

    const NO_CRIT: FixedRoll = FixedRoll(1.0);
    const ALWAYS_CRIT: FixedRoll = FixedRoll(0.0);

    fn test_state() -> CombatState {
        let enemy = Enemy::new("Goblin Scholar", EnemyTier::Common, 200, 10, 100, 50);
        CombatState::new(enemy, 100, 100, 10)
    }

    fn damage_of(resolution: &TurnResolution, before: &CombatState) -> i32 {
        before.enemy.hp - resolution.state.enemy.hp
    }

    fn resolve(
        state: &CombatState,
        quality: AnswerQuality,
        rng: FixedRoll,
        modifiers: &TurnModifiers<'_>,
    ) -> TurnResolution {
        let mut rng = rng;
        resolve_turn(state, quality, 10, 3, 0, &mut rng, modifiers)
    }

    #[test]
    fn baseline_damage_by_quality() {
        let state = test_state();
        let modifiers = TurnModifiers::new();

        let perfect = resolve(&state, AnswerQuality::Perfect, NO_CRIT, &modifiers);
        let correct = resolve(&state, AnswerQuality::Correct, NO_CRIT, &modifiers);
        let partial = resolve(&state, AnswerQuality::Partial, NO_CRIT, &modifiers);

        assert_eq!(damage_of(&perfect, &state), 20);
        assert_eq!(damage_of(&correct, &state), 10);
        assert_eq!(damage_of(&partial, &state), 5);
        assert_eq!(perfect.event.action, CombatAction::PlayerAttack);
        assert_eq!(partial.event.action, CombatAction::PlayerGlancing);
    }

    #[test]
    fn input_state_is_never_mutated() {
        let mut state = test_state();
        state.poison_damage = 5;
        let snapshot = state.clone();
        let effects = [
            ParsedSpecialEffect::new(EffectKind::HealOnCorrect, 5, "Amulet"),
            ParsedSpecialEffect::new(EffectKind::DoubleCritDamage, 2, "Axe"),
        ];
        let modifiers = TurnModifiers::new().with_effects(&effects);

        for quality in [
            AnswerQuality::Perfect,
            AnswerQuality::Correct,
            AnswerQuality::Partial,
            AnswerQuality::Wrong,
            AnswerQuality::Timeout,
        ] {
            for rng in [NO_CRIT, ALWAYS_CRIT] {
                let _ = resolve(&state, quality, rng, &modifiers);
                assert_eq!(state, snapshot);
            }
        }
    }

    #[test]
    fn wrong_answer_damage_respects_defense_floor() {
        let state = test_state();
        let mut rng = NO_CRIT;

        let hit = resolve_turn(
            &state,
            AnswerQuality::Wrong,
            10,
            3,
            0,
            &mut rng,
            &TurnModifiers::new(),
        );
        assert_eq!(hit.state.player_hp, 93);
        assert_eq!(hit.event.action, CombatAction::EnemyAttack);
        assert_eq!(hit.state.counts.wrong, 1);

        let mut weak = test_state();
        weak.enemy.attack = 2;
        let scratch = resolve_turn(
            &weak,
            AnswerQuality::Wrong,
            10,
            3,
            0,
            &mut rng,
            &TurnModifiers::new(),
        );
        assert_eq!(scratch.state.player_hp, 99);
    }

    #[test]
    fn timeout_poison_lands_next_turn() {
        let state = test_state();
        let modifiers = TurnModifiers::new();

        let timeout = resolve(&state, AnswerQuality::Timeout, NO_CRIT, &modifiers);
        assert_eq!(timeout.event.action, CombatAction::EnemyPoison);
        assert_eq!(timeout.state.player_hp, 93);
        assert_eq!(timeout.state.poison_damage, BattleConfig::POISON_DAMAGE);
        assert_eq!(timeout.state.counts.wrong, 1);

        let next = resolve(&timeout.state, AnswerQuality::Correct, NO_CRIT, &modifiers);
        assert_eq!(next.poison_tick, Some(5));
        assert_eq!(next.state.player_hp, 88);
        assert_eq!(next.state.poison_damage, 0);
        assert_eq!(next.state.log[1].action, CombatAction::PoisonTick);
        assert_eq!(next.state.log[2].action, CombatAction::PlayerAttack);
    }

    #[test]
    fn stacked_modifiers_without_crit() {
        let state = test_state();
        let modifiers = TurnModifiers::new()
            .with_tier(EvolutionTier::Ascended)
            .with_mode(RetrievalMode::Teach)
            .with_confidence(ConfidenceLevel::Instant);

        let result = resolve(&state, AnswerQuality::Perfect, NO_CRIT, &modifiers);

        assert_eq!(damage_of(&result, &state), 56);
        assert!(!result.critical);
    }

    #[test]
    fn stacked_modifiers_with_crit() {
        let state = test_state();
        let modifiers = TurnModifiers::new()
            .with_tier(EvolutionTier::Legendary)
            .with_mode(RetrievalMode::Teach)
            .with_confidence(ConfidenceLevel::Instant);

        let result = resolve(&state, AnswerQuality::Perfect, ALWAYS_CRIT, &modifiers);

        assert_eq!(damage_of(&result, &state), 90);
        assert_eq!(result.event.action, CombatAction::PlayerCritical);
    }

    #[test]
    fn tier_crit_bonus_feeds_the_roll() {
        let state = test_state();
        // 0% base + 10% tier bonus: a 0.05 roll crits, a 0.15 roll does not
        let modifiers = TurnModifiers::new().with_tier(EvolutionTier::Ascended);

        let crit = resolve(&state, AnswerQuality::Correct, FixedRoll(0.05), &modifiers);
        let plain = resolve(&state, AnswerQuality::Correct, FixedRoll(0.15), &modifiers);

        assert!(crit.critical);
        assert!(!plain.critical);

        let evolved = TurnModifiers::new().with_tier(EvolutionTier::Evolved);
        let none = resolve(&state, AnswerQuality::Correct, FixedRoll(0.0), &evolved);
        assert!(!none.critical);
    }

    #[test]
    fn partial_answers_never_crit() {
        let state = test_state();
        let mut rolled = false;
        let mut rng = || {
            rolled = true;
            0.0
        };

        let result = resolve_turn(
            &state,
            AnswerQuality::Partial,
            10,
            0,
            100,
            &mut rng,
            &TurnModifiers::new(),
        );

        assert!(!result.critical);
        assert_eq!(result.event.action, CombatAction::PlayerGlancing);
        assert!(!rolled);
    }

    #[test]
    fn guess_is_glancing_unless_crit() {
        let state = test_state();
        let modifiers = TurnModifiers::new().with_confidence(ConfidenceLevel::Guess);

        let glancing = resolve(&state, AnswerQuality::Perfect, NO_CRIT, &modifiers);
        assert_eq!(glancing.event.action, CombatAction::PlayerGlancing);
        assert_eq!(damage_of(&glancing, &state), 10);

        let mut rng = ALWAYS_CRIT;
        let crit = resolve_turn(
            &state,
            AnswerQuality::Correct,
            10,
            0,
            50,
            &mut rng,
            &modifiers,
        );
        assert_eq!(crit.event.action, CombatAction::PlayerCritical);
        // (0.5 + 0.5) × 10
        assert_eq!(damage_of(&crit, &state), 10);
    }

    #[test]
    fn mode_multipliers_apply() {
        let state = test_state();
        let reversed = TurnModifiers::new().with_mode(RetrievalMode::Reversed);
        let connect = TurnModifiers::new().with_mode(RetrievalMode::Connect);

        let r = resolve(&state, AnswerQuality::Correct, NO_CRIT, &reversed);
        let c = resolve(&state, AnswerQuality::Correct, NO_CRIT, &connect);

        assert_eq!(damage_of(&r, &state), 11);
        assert_eq!(damage_of(&c, &state), 12);
    }

    #[test]
    fn perfect_bonus_is_added_after_floor() {
        let state = test_state();
        let effects = [ParsedSpecialEffect::new(
            EffectKind::BonusDamageOnPerfect,
            3,
            "Quill",
        )];
        let modifiers = TurnModifiers::new()
            .with_mode(RetrievalMode::Reversed)
            .with_effects(&effects);

        // floor(10 × 2.0 × 1.1) + 3
        let perfect = resolve(&state, AnswerQuality::Perfect, NO_CRIT, &modifiers);
        assert_eq!(damage_of(&perfect, &state), 25);
        assert_eq!(perfect.activations.len(), 1);
        assert_eq!(
            perfect.activations[0].action,
            CombatAction::EquipmentBonusDamage
        );

        let correct = resolve(&state, AnswerQuality::Correct, NO_CRIT, &modifiers);
        assert_eq!(damage_of(&correct, &state), 11);
        assert!(correct.activations.is_empty());
    }

    #[test]
    fn double_crit_doubles_final_damage() {
        let state = test_state();
        let effects = [
            ParsedSpecialEffect::new(EffectKind::BonusDamageOnPerfect, 3, "Quill"),
            ParsedSpecialEffect::new(EffectKind::DoubleCritDamage, 2, "Axe"),
        ];
        let modifiers = TurnModifiers::new().with_effects(&effects);

        // (floor(10 × 2.5) + 3) × 2
        let mut rng = ALWAYS_CRIT;
        let crit = resolve_turn(
            &state,
            AnswerQuality::Perfect,
            10,
            3,
            100,
            &mut rng,
            &modifiers,
        );
        assert!(crit.critical);
        assert_eq!(damage_of(&crit, &state), 56);
        let actions: Vec<_> = crit.activations.iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            vec![
                CombatAction::EquipmentBonusDamage,
                CombatAction::EquipmentDoubleCrit
            ]
        );

        let plain = resolve(&state, AnswerQuality::Perfect, NO_CRIT, &modifiers);
        assert_eq!(damage_of(&plain, &state), 23);
    }

    #[test]
    fn maximal_effect_values_saturate() {
        let state = test_state();
        let effects = [
            parse_special_effect("Perfect answers deal +2147483647 bonus damage", "Cursed Quill"),
            parse_special_effect("Critical hits deal double damage", "Axe"),
            parse_special_effect("Correct answers heal 2147483647 HP", "Elixir"),
        ];
        let modifiers = TurnModifiers::new().with_effects(&effects);

        let mut rng = ALWAYS_CRIT;
        let hit = resolve_turn(
            &state,
            AnswerQuality::Perfect,
            10,
            3,
            100,
            &mut rng,
            &modifiers,
        );

        assert_eq!(effects[0].value, i32::MAX);
        assert_eq!(hit.event.damage, i32::MAX);
        assert_eq!(hit.state.enemy.hp, 200 - i32::MAX);
        assert_eq!(hit.state.player_hp, 100);

        let finisher = resolve_turn(
            &hit.state,
            AnswerQuality::Perfect,
            i32::MAX,
            3,
            i32::MAX,
            &mut rng,
            &modifiers,
        );
        assert_eq!(finisher.state.enemy.hp, i32::MIN);
    }

    #[test]
    fn heal_on_correct_caps_at_max() {
        let mut state = test_state();
        state.player_hp = 97;
        let effects = [ParsedSpecialEffect::new(
            EffectKind::HealOnCorrect,
            5,
            "Amulet",
        )];
        let modifiers = TurnModifiers::new().with_effects(&effects);

        let healed = resolve(&state, AnswerQuality::Correct, NO_CRIT, &modifiers);
        assert_eq!(healed.state.player_hp, 100);
        assert_eq!(healed.activations[0].action, CombatAction::EquipmentHeal);

        let partial = resolve(&state, AnswerQuality::Partial, NO_CRIT, &modifiers);
        assert_eq!(partial.state.player_hp, 97);
        assert!(partial.activations.is_empty());
    }

    #[test]
    fn gold_bonus_never_emits_activation() {
        let state = test_state();
        let effects = [ParsedSpecialEffect::new(EffectKind::GoldBonusPct, 10, "Purse")];
        let modifiers = TurnModifiers::new().with_effects(&effects);

        let result = resolve(&state, AnswerQuality::Perfect, NO_CRIT, &modifiers);

        assert!(result.activations.is_empty());
        assert_eq!(result.state.log.len(), 1);
    }

    #[test]
    fn card_index_and_counters_advance() {
        let state = test_state();
        let modifiers = TurnModifiers::new();

        let first = resolve(&state, AnswerQuality::Partial, NO_CRIT, &modifiers);
        let second = resolve(&first.state, AnswerQuality::Perfect, NO_CRIT, &modifiers);

        assert_eq!(second.state.current_card_index, 2);
        assert_eq!(second.state.counts.partial, 1);
        assert_eq!(second.state.counts.perfect, 1);
        assert_eq!(second.state.log.len(), 2);
    }

    #[test]
    fn enemy_hp_is_not_clamped() {
        let mut state = test_state();
        state.enemy.hp = 4;

        let result = resolve(&state, AnswerQuality::Perfect, NO_CRIT, &TurnModifiers::new());

        assert_eq!(result.state.enemy.hp, -16);
    }

    #[test]
    fn phase_multiplier_scales_enemy_attack() {
        let state = test_state();
        let modifiers = TurnModifiers::new().with_enemy_damage_multiplier(1.5);

        // floor(10 × 1.5) − 3
        let result = resolve(&state, AnswerQuality::Wrong, NO_CRIT, &modifiers);

        assert_eq!(result.state.player_hp, 88);
    }
}
