//! Single-step undo.

use battle_core::CombatState;

use crate::abilities::AbilityBook;
use crate::queue::CardQueue;
use crate::wager::WagerLedger;

/// Everything an answer can change, captured right before it is applied.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SessionSnapshot {
    pub state: CombatState,
    pub queue: CardQueue,
    pub abilities: AbilityBook,
    pub wager: WagerLedger,
    pub phase: Option<usize>,
}
