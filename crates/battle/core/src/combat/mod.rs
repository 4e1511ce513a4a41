//! Turn resolution.
//!
//! This module provides pure functions for resolving one answered card into
//! one combat turn. All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `resolve_turn`: complete turn resolution (status tick, outcome, damage, healing)
//! - `is_combat_over`: victory/defeat check on a resolved state
//!
//! The multiplier tables live in [`tables`].

mod outcome;
mod resolver;
pub mod tables;

pub use outcome::{CombatOutcome, is_combat_over};
pub use resolver::{TurnModifiers, TurnResolution, resolve_turn};
