//! Stateful encounter controller.
//!
//! [`CombatSession`] owns everything that lives for exactly one encounter:
//! the current [`battle_core::CombatState`], the card queue with its re-queue
//! counters, the single undo snapshot, the wager ledger and the active
//! ability buffs. Hosts drive it with discrete events (answer submitted,
//! ability used, wager placed, undo requested) and discard it when the
//! encounter ends.

pub mod abilities;
pub mod errors;
pub mod queue;
pub mod session;
mod undo;
pub mod wager;

pub use abilities::{AbilityActivation, AbilityBook, AbilityId};
pub use errors::SessionError;
pub use queue::CardQueue;
pub use session::{
    AnswerContext, AnswerSubmission, CombatSession, EncounterSetup, EncounterSummary,
    PlayerStats, RewardBonuses, SessionStatus, TurnReport,
};
pub use wager::{WagerLedger, WagerSettlement, WagerStake};
