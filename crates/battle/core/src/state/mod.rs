//! Encounter state types.
//!
//! [`CombatState`] is a value type: the resolver consumes a reference and
//! returns a fresh state, so hosts can keep the previous value around for
//! undo or diffing without any copy-on-write machinery.

mod abilities;
mod combat;
mod enemy;
mod event;

pub use abilities::{AbilityEffectKind, ActiveAbilityEffect, ActiveEffects};
pub use combat::{CombatState, QualityCounts};
pub use enemy::{Enemy, EnemyTier};
pub use event::{CombatAction, CombatEvent};
