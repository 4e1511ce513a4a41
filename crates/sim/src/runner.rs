//! Plays a script through a combat session.

use battle_core::{BattleConfig, BossPhaseOracle, CritRng, EnemyTier, EquippedItem};
use battle_session::{CombatSession, EncounterSummary, SessionStatus};
use tracing::{info, warn};

use crate::script::EncounterScript;

/// Everything the simulator prints.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    pub lines: Vec<String>,
    /// `None` when the script ran out of turns before the encounter was decided.
    pub summary: Option<EncounterSummary>,
}

/// Plays every scripted turn until the encounter is decided.
///
/// Rejected commands (a wager the player cannot afford, an ability on
/// cooldown) are reported and skipped; the answer is still submitted.
pub fn run(
    script: &EncounterScript,
    config: BattleConfig,
    bosses: &(impl BossPhaseOracle + ?Sized),
    rng: &mut (impl CritRng + ?Sized),
) -> anyhow::Result<RunOutcome> {
    let mut session = CombatSession::new(script.setup(), config, bosses);
    let mut lines = Vec::new();

    if let Some(phase) = session.current_phase() {
        lines.push(format!("== {} ({})", phase.name, phase.description));
    }

    for (turn, step) in script.turns.iter().enumerate() {
        if session.status().is_over() {
            break;
        }
        let Some(card) = session.current_card().cloned() else {
            break;
        };
        lines.push(format!(
            "-- turn {} card {card} (hints {})",
            turn + 1,
            if session.hints_available() { "on" } else { "off" }
        ));

        if let Some(stake) = step.stake() {
            match session.place_wager(stake) {
                Ok(amount) => lines.push(format!("   wager {amount} gold")),
                Err(err) => {
                    warn!(%err, "wager rejected");
                    lines.push(format!("   wager rejected: {err}"));
                }
            }
        }
        if let Some(activation) = step.activation() {
            match session.use_ability(&activation) {
                Ok(()) => lines.push(format!("   ability {} ready", activation.ability)),
                Err(err) => {
                    warn!(%err, "ability rejected");
                    lines.push(format!("   ability rejected: {err}"));
                }
            }
        }

        let report = session.submit_answer(step.submission(), rng)?;
        for event in &report.events {
            lines.push(format!("   [{}] {}", event.action, event.description));
        }
        if let Some(wager) = report.wager {
            let verdict = if wager.won() { "won" } else { "lost" };
            lines.push(format!("   wager {verdict}: {:+}", wager.delta));
        }
        if report.requeued {
            lines.push(format!("   {card} will come back later"));
        }

        if step.undo {
            session.undo()?;
            lines.push("   (undone)".to_string());
        }
    }

    let status = session.status();
    if status == SessionStatus::Ongoing {
        info!("script ended before the encounter was decided");
        lines.push("Script ended; the player retreats.".to_string());
        session.retreat();
        return Ok(RunOutcome {
            lines,
            summary: None,
        });
    }

    let loot = script.loot.clone();
    let mut drop = move |_: EnemyTier| -> Option<EquippedItem> { loot.clone() };
    let summary = session.finish(script.bonuses(), &mut drop)?;
    lines.push(format!(
        "{:?}: {} xp, {:+} gold (wagers {:+})",
        summary.status, summary.rewards.xp, summary.gold_delta, summary.wager_net
    ));
    if let Some(item) = &summary.loot {
        lines.push(format!("Loot: {}", item.name));
    }

    Ok(RunOutcome {
        lines,
        summary: Some(summary),
    })
}
