//! Temporary class-ability buffs.
//!
//! The ability system lives outside this crate; it hands effects to the
//! session, which counts them down one answered turn at a time.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

/// Kind of a temporary ability buff.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityEffectKind {
    /// Raises attack power by `value` percent.
    DamageBoost,
    /// Adds `value` percentage points of crit chance.
    CriticalBoost,
    /// Cancels the damage of a missed answer.
    AbsorbDamage,
}

/// A buff with a remaining duration in turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveAbilityEffect {
    pub kind: AbilityEffectKind,
    pub value: i32,
    pub remaining: u32,
}

impl ActiveAbilityEffect {
    pub const fn new(kind: AbilityEffectKind, value: i32, remaining: u32) -> Self {
        Self {
            kind,
            value,
            remaining,
        }
    }
}

/// Active ability effects on the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffects {
    effects: ArrayVec<ActiveAbilityEffect, { BattleConfig::MAX_ACTIVE_EFFECTS }>,
}

impl ActiveEffects {
    /// Creates an empty effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Adds an effect. Effects with zero duration are ignored.
    ///
    /// Returns `Err(effect)` when the set is full.
    pub fn push(&mut self, effect: ActiveAbilityEffect) -> Result<(), ActiveAbilityEffect> {
        if effect.remaining == 0 {
            return Ok(());
        }
        self.effects.try_push(effect).map_err(|e| e.element())
    }

    pub fn has(&self, kind: AbilityEffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Sum of the values of every active effect of `kind`.
    pub fn total(&self, kind: AbilityEffectKind) -> i32 {
        self.effects
            .iter()
            .filter(|e| e.kind == kind)
            .fold(0, |total: i32, e| total.saturating_add(e.value))
    }

    /// Decrements every duration by one turn and drops expired effects.
    pub fn tick(&mut self) {
        for effect in self.effects.iter_mut() {
            effect.remaining = effect.remaining.saturating_sub(1);
        }
        self.effects.retain(|e| e.remaining > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveAbilityEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
