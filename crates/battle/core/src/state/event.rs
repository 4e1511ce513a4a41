/// Tag describing what happened in one log line.
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
pub enum CombatAction {
    // ========================================================================
    // Primary turn outcomes
    // ========================================================================
    PlayerAttack,
    PlayerCritical,
    PlayerGlancing,
    EnemyAttack,
    EnemyPoison,

    // ========================================================================
    // Status and equipment
    // ========================================================================
    /// Pending poison landed at the start of a turn.
    PoisonTick,
    /// Flat bonus damage from a perfect answer.
    EquipmentBonusDamage,
    /// Heal granted by a correct answer.
    EquipmentHeal,
    /// Critical damage doubled.
    EquipmentDoubleCrit,

    // ========================================================================
    // Session-level
    // ========================================================================
    /// An absorb buff cancelled the damage of a missed answer.
    Absorbed,
    /// The boss entered a new phase.
    PhaseChange,
}

impl CombatAction {
    /// Whether this action is one of the per-turn primary outcomes.
    pub const fn is_primary(&self) -> bool {
        matches!(
            self,
            Self::PlayerAttack
                | Self::PlayerCritical
                | Self::PlayerGlancing
                | Self::EnemyAttack
                | Self::EnemyPoison
        )
    }
}

/// One combat log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEvent {
    pub action: CombatAction,
    pub damage: i32,
    pub description: String,
}

impl CombatEvent {
    pub fn new(action: CombatAction, damage: i32, description: impl Into<String>) -> Self {
        Self {
            action,
            damage,
            description: description.into(),
        }
    }
}
