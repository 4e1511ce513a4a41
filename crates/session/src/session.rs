//! Encounter controller.

use std::time::Duration;

use battle_core::{
    AnswerClassifier, AnswerQuality, BattleConfig, BossPhase, BossPhaseOracle, CardId,
    CombatAction, CombatEvent, CombatOutcome, CombatRewards, CombatState, ConfidenceLevel,
    CritRng, Enemy, EquippedItem, EvolutionTier, LootSource, ParsedSpecialEffect, RetrievalMode,
    TurnModifiers, get_combat_rewards, is_combat_over, parse_equipment_effects, phase_index,
    resolve_turn,
};
use tracing::{debug, info};

use crate::abilities::{AbilityActivation, AbilityBook};
use crate::errors::SessionError;
use crate::queue::CardQueue;
use crate::undo::SessionSnapshot;
use crate::wager::{WagerLedger, WagerSettlement, WagerStake};

/// Player numbers the host hands in at encounter start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub max_hp: i32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub crit_chance: i32,
    pub spell_points: u32,
    /// Gold balance available for wagers.
    pub gold: u32,
}

/// Everything needed to start an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterSetup {
    pub enemy: Enemy,
    pub player: PlayerStats,
    pub cards: Vec<CardId>,
    pub equipment: Vec<EquippedItem>,
}

/// Per-card context from the progression data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnswerContext {
    pub confidence: Option<ConfidenceLevel>,
    pub tier: Option<EvolutionTier>,
    pub mode: Option<RetrievalMode>,
}

/// An already-classified answer to the current card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerSubmission {
    pub quality: AnswerQuality,
    pub context: AnswerContext,
}

impl AnswerSubmission {
    pub fn new(quality: AnswerQuality) -> Self {
        Self {
            quality,
            context: AnswerContext::default(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: AnswerContext) -> Self {
        self.context = context;
        self
    }
}

/// Encounter status as seen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Ongoing,
    Victory,
    Defeat,
    /// Every queued card was answered and both sides are still standing.
    OutOfCards,
}

impl SessionStatus {
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// What one answer did.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    pub card: CardId,
    /// Every event appended to the log this turn, in order.
    pub events: Vec<CombatEvent>,
    pub critical: bool,
    /// Whether the card went back to the end of the queue.
    pub requeued: bool,
    /// Whether an absorb buff cancelled the damage of a miss.
    pub absorbed: bool,
    pub wager: Option<WagerSettlement>,
    /// Newly entered boss phase, reported once.
    pub phase_change: Option<BossPhase>,
    pub status: SessionStatus,
}

/// Percentage bonuses from streaks, gear and class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardBonuses {
    pub streak_bonus_pct: i32,
    pub xp_bonus_pct: i32,
    pub gold_bonus_pct: i32,
}

/// Final numbers of a decided encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterSummary {
    pub status: SessionStatus,
    pub rewards: CombatRewards,
    pub wager_net: i64,
    /// Reward gold plus wager net. Negative when wagers lost more than was earned.
    pub gold_delta: i64,
    pub loot: Option<EquippedItem>,
    pub turns: u32,
}

/// Live encounter: combat state plus queue, undo, wager and ability bookkeeping.
///
/// # Invariants
///
/// - `queue.len() == state.total_cards`
/// - at most one undo snapshot exists, taken right before the last answer
/// - no command is accepted once the encounter is decided (undo excepted,
///   until [`CombatSession::finish`] is called)
#[derive(Debug)]
pub struct CombatSession {
    state: CombatState,
    queue: CardQueue,
    abilities: AbilityBook,
    wager: WagerLedger,
    phases: Vec<BossPhase>,
    phase: Option<usize>,
    player: PlayerStats,
    effects: Vec<ParsedSpecialEffect>,
    config: BattleConfig,
    undo: Option<SessionSnapshot>,
    summary: Option<EncounterSummary>,
}

impl CombatSession {
    /// Starts an encounter.
    ///
    /// Boss-tier enemies look their phases up in `bosses`; anything else, or
    /// a boss the oracle does not know, fights without phases.
    pub fn new(
        setup: EncounterSetup,
        config: BattleConfig,
        bosses: &(impl BossPhaseOracle + ?Sized),
    ) -> Self {
        let EncounterSetup {
            enemy,
            player,
            cards,
            equipment,
        } = setup;

        let phases = if enemy.is_boss() {
            bosses.phases(&enemy.name).to_vec()
        } else {
            Vec::new()
        };
        let phase = phase_index(&phases, enemy.hp_fraction());
        let effects = parse_equipment_effects(&equipment);
        let queue = CardQueue::new(cards);
        let state = CombatState::new(enemy, player.max_hp, player.hp, queue.len() as u32);

        info!(
            enemy = %state.enemy.name,
            cards = queue.len(),
            phases = phases.len(),
            effects = effects.len(),
            "encounter started"
        );

        Self {
            state,
            queue,
            abilities: AbilityBook::new(player.spell_points),
            wager: WagerLedger::default(),
            phases,
            phase,
            player,
            effects,
            config,
            undo: None,
            summary: None,
        }
    }

    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn queue(&self) -> &CardQueue {
        &self.queue
    }

    pub fn abilities(&self) -> &AbilityBook {
        &self.abilities
    }

    pub fn wager(&self) -> &WagerLedger {
        &self.wager
    }

    pub fn effects(&self) -> &[ParsedSpecialEffect] {
        &self.effects
    }

    /// Card waiting for an answer.
    pub fn current_card(&self) -> Option<&CardId> {
        if self.status().is_over() {
            return None;
        }
        self.queue.get(self.state.current_card_index)
    }

    pub fn status(&self) -> SessionStatus {
        match is_combat_over(&self.state) {
            CombatOutcome::Victory => SessionStatus::Victory,
            CombatOutcome::Defeat => SessionStatus::Defeat,
            CombatOutcome::Ongoing if self.state.cards_remaining() == 0 => {
                SessionStatus::OutOfCards
            }
            CombatOutcome::Ongoing => SessionStatus::Ongoing,
        }
    }

    /// Current boss phase, if the enemy has phases.
    pub fn current_phase(&self) -> Option<&BossPhase> {
        self.phase.map(|index| &self.phases[index])
    }

    /// Hints are available unless the current boss phase disables them.
    pub fn hints_available(&self) -> bool {
        !self.current_phase().is_some_and(|phase| phase.hints_disabled)
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_some() && self.summary.is_none()
    }

    /// Gold the player can still stake: balance plus wager net so far.
    pub fn available_gold(&self) -> u32 {
        let available = i64::from(self.player.gold) + self.wager.net();
        available.clamp(0, i64::from(u32::MAX)) as u32
    }

    fn ensure_ongoing(&self) -> Result<(), SessionError> {
        if self.summary.is_some() || self.status().is_over() {
            return Err(SessionError::EncounterOver);
        }
        Ok(())
    }

    /// Commits a stake for the next answer. `WagerStake::None` withdraws nothing
    /// and is accepted only when no stake is pending.
    pub fn place_wager(&mut self, stake: WagerStake) -> Result<u32, SessionError> {
        self.ensure_ongoing()?;
        if let Some(pending) = self.wager.pending() {
            return Err(SessionError::WagerAlreadyPlaced { stake: pending });
        }

        let available = self.available_gold();
        let amount = stake.amount(&self.config, available);
        if stake != WagerStake::None && (amount == 0 || amount > available) {
            return Err(SessionError::InsufficientGold {
                stake: amount,
                available,
            });
        }

        self.wager.place(amount);
        debug!(?stake, amount, "wager placed");
        Ok(amount)
    }

    /// Activates a class ability before the next answer.
    pub fn use_ability(&mut self, activation: &AbilityActivation) -> Result<(), SessionError> {
        self.ensure_ongoing()?;
        self.abilities.activate(activation)?;
        debug!(
            ability = %activation.ability,
            kind = %activation.effect.kind,
            remaining_sp = self.abilities.spell_points(),
            "ability activated"
        );
        Ok(())
    }

    /// Grades a raw response with `classifier` and submits it.
    pub fn submit_response(
        &mut self,
        classifier: &(impl AnswerClassifier + ?Sized),
        response: &str,
        elapsed: Duration,
        time_limit: Duration,
        context: AnswerContext,
        rng: &mut (impl CritRng + ?Sized),
    ) -> Result<TurnReport, SessionError> {
        let card = self.current_card().ok_or(SessionError::EncounterOver)?;
        let quality = classifier.classify(card, response, elapsed, time_limit);
        self.submit_answer(AnswerSubmission { quality, context }, rng)
    }

    /// Resolves one answer to the current card.
    pub fn submit_answer(
        &mut self,
        answer: AnswerSubmission,
        rng: &mut (impl CritRng + ?Sized),
    ) -> Result<TurnReport, SessionError> {
        self.ensure_ongoing()?;
        let card = self
            .queue
            .get(self.state.current_card_index)
            .cloned()
            .ok_or(SessionError::EncounterOver)?;

        let snapshot = self.snapshot();
        let quality = answer.quality;
        let log_start = self.state.log.len();

        let modifiers = TurnModifiers {
            confidence: answer.context.confidence,
            tier: answer.context.tier,
            mode: answer.context.mode,
            effects: &self.effects,
            enemy_damage_multiplier: self
                .current_phase()
                .map_or(1.0, |phase| phase.damage_multiplier),
        };
        let resolution = resolve_turn(
            &self.state,
            quality,
            self.abilities.boosted_attack(self.player.attack),
            self.player.defense,
            self.abilities.boosted_crit_chance(self.player.crit_chance),
            rng,
            &modifiers,
        );
        let critical = resolution.critical;
        let mut next = resolution.state;

        let absorbed = quality.is_miss() && self.abilities.absorbs_damage();
        if absorbed {
            let prevented = self.state.player_hp - next.player_hp;
            next.player_hp = self.state.player_hp;
            next.log.push(CombatEvent::new(
                CombatAction::Absorbed,
                prevented,
                format!("Your barrier absorbs {prevented} damage."),
            ));
        }

        if let Some(poison) = self.config.forced_poison {
            next.poison_damage = poison;
        }

        let requeued =
            quality.is_miss() && self.queue.requeue(&card, self.config.max_requeues);
        if requeued {
            next.total_cards += 1;
        }

        let wager = self.wager.settle(quality);
        self.abilities.tick();

        let phase = phase_index(&self.phases, next.enemy.hp_fraction());
        let phase_change = match (self.phase, phase) {
            (Some(prev), Some(index)) if prev != index => {
                let entered = self.phases[index].clone();
                next.log.push(CombatEvent::new(
                    CombatAction::PhaseChange,
                    0,
                    format!("{} enters {}: {}", next.enemy.name, entered.name, entered.description),
                ));
                Some(entered)
            }
            _ => None,
        };
        self.phase = phase;

        let events = next.log[log_start..].to_vec();
        self.state = next;
        self.undo = Some(snapshot);

        let status = self.status();
        debug!(
            card = %card,
            %quality,
            critical,
            requeued,
            absorbed,
            enemy_hp = self.state.enemy.hp,
            player_hp = self.state.player_hp,
            "turn resolved"
        );
        if let Some(entered) = &phase_change {
            info!(phase = %entered.name, hints_disabled = entered.hints_disabled, "boss phase changed");
        }
        if status.is_over() {
            info!(?status, turns = self.state.current_card_index, "encounter decided");
        }

        Ok(TurnReport {
            card,
            events,
            critical,
            requeued,
            absorbed,
            wager,
            phase_change,
            status,
        })
    }

    /// Restores the state captured right before the last answer.
    ///
    /// The snapshot is consumed: a second undo without a new answer in
    /// between is rejected.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        if self.summary.is_some() {
            return Err(SessionError::EncounterOver);
        }
        let snapshot = self.undo.take().ok_or(SessionError::NothingToUndo)?;
        self.restore(snapshot);
        debug!(card_index = self.state.current_card_index, "answer undone");
        Ok(())
    }

    /// Settles a decided encounter.
    ///
    /// Victory earns XP (scaled by the final boss phase) and gold, and rolls
    /// `loot` once. Defeat and running out of cards earn nothing, but lost
    /// wagers still count. Calling again returns the same summary.
    pub fn finish(
        &mut self,
        bonuses: RewardBonuses,
        loot: &mut (impl LootSource + ?Sized),
    ) -> Result<EncounterSummary, SessionError> {
        if let Some(summary) = &self.summary {
            return Ok(summary.clone());
        }
        let status = self.status();
        if !status.is_over() {
            return Err(SessionError::EncounterOngoing);
        }

        let (rewards, drop) = if status == SessionStatus::Victory {
            let mut rewards = get_combat_rewards(
                &self.state,
                &self.state.enemy,
                bonuses.streak_bonus_pct,
                bonuses.xp_bonus_pct,
                bonuses.gold_bonus_pct,
                &self.effects,
            );
            if let Some(phase) = self.current_phase() {
                rewards.xp = (f64::from(rewards.xp) * phase.xp_multiplier).floor() as u32;
            }
            (rewards, loot.roll_drop(self.state.enemy.tier))
        } else {
            (CombatRewards::default(), None)
        };

        let wager_net = self.wager.net();
        let summary = EncounterSummary {
            status,
            rewards,
            wager_net,
            gold_delta: i64::from(rewards.gold) + wager_net,
            loot: drop,
            turns: self.state.current_card_index,
        };
        info!(
            ?status,
            xp = summary.rewards.xp,
            gold_delta = summary.gold_delta,
            loot = ?summary.loot.as_ref().map(|item| item.name.as_str()),
            "encounter settled"
        );

        self.undo = None;
        self.summary = Some(summary.clone());
        Ok(summary)
    }

    /// Abandons the encounter. Nothing is rolled back or rewarded.
    pub fn retreat(self) {
        info!(
            enemy = %self.state.enemy.name,
            turns = self.state.current_card_index,
            "player retreated"
        );
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            queue: self.queue.clone(),
            abilities: self.abilities.clone(),
            wager: self.wager,
            phase: self.phase,
        }
    }

    fn restore(&mut self, snapshot: SessionSnapshot) {
        let SessionSnapshot {
            state,
            queue,
            abilities,
            wager,
            phase,
        } = snapshot;
        self.state = state;
        self.queue = queue;
        self.abilities = abilities;
        self.wager = wager;
        self.phase = phase;
    }
}
