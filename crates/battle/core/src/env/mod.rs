//! Oracles for everything the rules consume from the outside world.
//!
//! The engine performs no reads of its own: boss phase tables, loot drops,
//! answer grading and randomness are all injected through the traits here.

mod oracles;
mod rng;

pub use oracles::{AnswerClassifier, BossPhaseOracle, LootSource, NoBossPhases};
pub use rng::{CritRng, FixedRoll, PcgRng};
