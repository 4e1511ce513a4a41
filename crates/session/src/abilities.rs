//! Class-ability bookkeeping for one encounter.
//!
//! The ability system decides which abilities exist; the session only tracks
//! spell points, cooldowns and the buffs those abilities leave behind.

use std::collections::BTreeMap;

use battle_core::{AbilityEffectKind, ActiveAbilityEffect, ActiveEffects};

use crate::errors::SessionError;

/// Identifier of a class ability.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbilityId(pub String);

impl AbilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request to activate an ability, as supplied by the ability system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbilityActivation {
    pub ability: AbilityId,
    pub spell_point_cost: u32,
    /// Turns before the ability can be used again.
    pub cooldown: u32,
    pub effect: ActiveAbilityEffect,
}

/// Spell points, cooldowns and active buffs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityBook {
    effects: ActiveEffects,
    cooldowns: BTreeMap<AbilityId, u32>,
    spell_points: u32,
}

impl AbilityBook {
    pub fn new(spell_points: u32) -> Self {
        Self {
            effects: ActiveEffects::empty(),
            cooldowns: BTreeMap::new(),
            spell_points,
        }
    }

    pub fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    pub fn spell_points(&self) -> u32 {
        self.spell_points
    }

    /// Remaining cooldowns, to be handed back to the ability system.
    pub fn cooldowns(&self) -> &BTreeMap<AbilityId, u32> {
        &self.cooldowns
    }

    pub fn cooldown(&self, ability: &AbilityId) -> u32 {
        self.cooldowns.get(ability).copied().unwrap_or(0)
    }

    /// Attack power with damage boosts applied (percent, floored).
    pub fn boosted_attack(&self, attack_power: i32) -> i32 {
        let boost = self.effects.total(AbilityEffectKind::DamageBoost);
        let boosted = i64::from(attack_power) * (100 + i64::from(boost)) / 100;
        boosted.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Crit chance with critical boosts applied (percentage points).
    pub fn boosted_crit_chance(&self, crit_chance_percent: i32) -> i32 {
        crit_chance_percent.saturating_add(self.effects.total(AbilityEffectKind::CriticalBoost))
    }

    pub fn absorbs_damage(&self) -> bool {
        self.effects.has(AbilityEffectKind::AbsorbDamage)
    }

    /// Validates and applies an activation. On error nothing changes.
    pub fn activate(&mut self, activation: &AbilityActivation) -> Result<(), SessionError> {
        let remaining = self.cooldown(&activation.ability);
        if remaining > 0 {
            return Err(SessionError::AbilityOnCooldown {
                ability: activation.ability.clone(),
                remaining,
            });
        }
        if self.spell_points < activation.spell_point_cost {
            return Err(SessionError::InsufficientSpellPoints {
                needed: activation.spell_point_cost,
                available: self.spell_points,
            });
        }
        self.effects
            .push(activation.effect)
            .map_err(|_| SessionError::TooManyActiveEffects)?;

        self.spell_points -= activation.spell_point_cost;
        if activation.cooldown > 0 {
            self.cooldowns
                .insert(activation.ability.clone(), activation.cooldown);
        }
        Ok(())
    }

    /// Advances every buff duration and cooldown by one turn.
    pub fn tick(&mut self) {
        self.effects.tick();
        for remaining in self.cooldowns.values_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        self.cooldowns.retain(|_, remaining| *remaining > 0);
    }
}
