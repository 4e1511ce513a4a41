//! Scripted encounters.
//!
//! A script fixes the enemy, the player's numbers, the card queue and the
//! answer given on each turn, so an encounter can be replayed exactly.

use std::path::Path;

use anyhow::Context;
use battle_core::{
    AbilityEffectKind, ActiveAbilityEffect, AnswerQuality, CardId, ConfidenceLevel, Enemy,
    EquippedItem, EvolutionTier, RetrievalMode,
};
use battle_session::{
    AbilityActivation, AbilityId, AnswerContext, AnswerSubmission, EncounterSetup, PlayerStats,
    RewardBonuses, WagerStake,
};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct EncounterScript {
    pub enemy: Enemy,
    pub player: ScriptPlayer,
    pub cards: Vec<CardId>,
    #[serde(default)]
    pub equipment: Vec<EquippedItem>,
    pub turns: Vec<ScriptTurn>,
    #[serde(default)]
    pub bonuses: ScriptBonuses,
    /// Dropped on victory.
    #[serde(default)]
    pub loot: Option<EquippedItem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScriptPlayer {
    pub max_hp: i32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    #[serde(default)]
    pub crit_chance: i32,
    #[serde(default)]
    pub spell_points: u32,
    #[serde(default)]
    pub gold: u32,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct ScriptBonuses {
    #[serde(default)]
    pub streak_pct: i32,
    #[serde(default)]
    pub xp_pct: i32,
    #[serde(default)]
    pub gold_pct: i32,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub enum ScriptWager {
    Low,
    High,
    AllIn,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScriptAbility {
    pub id: String,
    #[serde(default)]
    pub cost: u32,
    #[serde(default)]
    pub cooldown: u32,
    pub kind: AbilityEffectKind,
    #[serde(default)]
    pub value: i32,
    pub duration: u32,
}

/// One scripted turn: optional setup commands, then the answer.
#[derive(Clone, Debug, Deserialize)]
pub struct ScriptTurn {
    pub quality: AnswerQuality,
    #[serde(default)]
    pub confidence: Option<ConfidenceLevel>,
    /// Evolution tier level 0-3; other values fall back to 0.
    #[serde(default)]
    pub tier: Option<u8>,
    #[serde(default)]
    pub mode: Option<RetrievalMode>,
    #[serde(default)]
    pub wager: Option<ScriptWager>,
    #[serde(default)]
    pub ability: Option<ScriptAbility>,
    /// Take this answer back right after submitting it.
    #[serde(default)]
    pub undo: bool,
}

impl EncounterScript {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse script RON: {}", e))
    }

    pub fn setup(&self) -> EncounterSetup {
        EncounterSetup {
            enemy: self.enemy.clone(),
            player: PlayerStats {
                max_hp: self.player.max_hp,
                hp: self.player.hp,
                attack: self.player.attack,
                defense: self.player.defense,
                crit_chance: self.player.crit_chance,
                spell_points: self.player.spell_points,
                gold: self.player.gold,
            },
            cards: self.cards.clone(),
            equipment: self.equipment.clone(),
        }
    }

    pub fn bonuses(&self) -> RewardBonuses {
        RewardBonuses {
            streak_bonus_pct: self.bonuses.streak_pct,
            xp_bonus_pct: self.bonuses.xp_pct,
            gold_bonus_pct: self.bonuses.gold_pct,
        }
    }
}

impl ScriptTurn {
    pub fn submission(&self) -> AnswerSubmission {
        AnswerSubmission::new(self.quality).with_context(AnswerContext {
            confidence: self.confidence,
            tier: self.tier.map(EvolutionTier::from_level),
            mode: self.mode,
        })
    }

    pub fn stake(&self) -> Option<WagerStake> {
        self.wager.map(|wager| match wager {
            ScriptWager::Low => WagerStake::Low,
            ScriptWager::High => WagerStake::High,
            ScriptWager::AllIn => WagerStake::AllIn,
        })
    }

    pub fn activation(&self) -> Option<AbilityActivation> {
        self.ability.as_ref().map(|ability| AbilityActivation {
            ability: AbilityId::new(ability.id.clone()),
            spell_point_cost: ability.cost,
            cooldown: ability.cooldown,
            effect: ActiveAbilityEffect::new(ability.kind, ability.value, ability.duration),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn bundled_shade_script_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scripts/shade.ron");

        let script = EncounterScript::load(&path).unwrap();

        assert_eq!(script.enemy.name, "The Forgetting Shade");
        assert_eq!(script.setup().equipment.len(), 3);
        assert_eq!(script.bonuses().streak_bonus_pct, 10);
        assert!(script.turns.iter().any(|turn| turn.undo));
    }

    #[test]
    fn turn_commands_convert_to_session_inputs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                enemy: (name: "Slime", tier: common, hp: 10, max_hp: 10, attack: 2, xp_reward: 5, gold_reward: 1),
                player: (max_hp: 20, hp: 20, attack: 5, defense: 0),
                cards: ["a"],
                turns: [(
                    quality: correct,
                    tier: Some(9),
                    wager: Some(AllIn),
                    ability: Some((id: "focus", cost: 3, kind: critical_boost, value: 20, duration: 2)),
                )],
            )"#
        )
        .unwrap();

        let script = EncounterScript::load(file.path()).unwrap();
        let turn = &script.turns[0];
        let activation = turn.activation().unwrap();

        assert_eq!(turn.submission().context.tier, Some(EvolutionTier::Base));
        assert_eq!(turn.stake(), Some(WagerStake::AllIn));
        assert_eq!(activation.ability, AbilityId::new("focus"));
        assert_eq!(activation.cooldown, 0);
        assert_eq!(activation.effect.kind, AbilityEffectKind::CriticalBoost);
    }
}
