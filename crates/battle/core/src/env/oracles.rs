use core::time::Duration;

use crate::boss::BossPhase;
use crate::effects::EquippedItem;
use crate::state::EnemyTier;
use crate::types::{AnswerQuality, CardId};

/// Oracle providing the ordered phase list of boss enemies.
///
/// Phases are ordered from full health to near-death. Unknown names yield an
/// empty slice, which the session treats as "no phases".
pub trait BossPhaseOracle {
    fn phases(&self, enemy_name: &str) -> &[BossPhase];
}

/// Oracle for encounters without boss content.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBossPhases;

impl BossPhaseOracle for NoBossPhases {
    fn phases(&self, _enemy_name: &str) -> &[BossPhase] {
        &[]
    }
}

/// Equipment drop source, invoked once on victory.
pub trait LootSource {
    fn roll_drop(&mut self, tier: EnemyTier) -> Option<EquippedItem>;
}

impl<F> LootSource for F
where
    F: FnMut(EnemyTier) -> Option<EquippedItem>,
{
    fn roll_drop(&mut self, tier: EnemyTier) -> Option<EquippedItem> {
        self(tier)
    }
}

/// Grades a raw response into an [`AnswerQuality`].
///
/// Grading happens before the engine runs; hosts plug their classifier in
/// here so the session can be driven from raw responses.
pub trait AnswerClassifier {
    fn classify(
        &self,
        card: &CardId,
        response: &str,
        elapsed: Duration,
        time_limit: Duration,
    ) -> AnswerQuality;
}
