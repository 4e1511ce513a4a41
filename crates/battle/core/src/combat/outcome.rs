use crate::state::CombatState;

/// Whether an encounter has been decided.
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
pub enum CombatOutcome {
    Ongoing,
    Victory,
    Defeat,
}

impl CombatOutcome {
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Victory when the enemy is at or below 0 HP, defeat when the player is.
///
/// The enemy check runs first, so a turn that drops both to zero is a
/// victory and the two outcomes never overlap.
pub fn is_combat_over(state: &CombatState) -> CombatOutcome {
    if state.enemy.is_defeated() {
        CombatOutcome::Victory
    } else if state.is_player_defeated() {
        CombatOutcome::Defeat
    } else {
        CombatOutcome::Ongoing
    }
}
