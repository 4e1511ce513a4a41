/// Difficulty class of an enemy.
///
/// Only [`EnemyTier::Boss`] enemies consult the boss phase catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum EnemyTier {
    #[default]
    Common,
    Elite,
    Boss,
}

/// Opponent stat block.
///
/// `hp` is signed: overkill damage drives it below zero and the defeat check
/// happens outside the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub name: String,
    pub tier: EnemyTier,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub xp_reward: u32,
    pub gold_reward: u32,
}

impl Enemy {
    /// Creates an enemy at full health.
    pub fn new(
        name: impl Into<String>,
        tier: EnemyTier,
        max_hp: i32,
        attack: i32,
        xp_reward: u32,
        gold_reward: u32,
    ) -> Self {
        Self {
            name: name.into(),
            tier,
            hp: max_hp,
            max_hp,
            attack,
            xp_reward,
            gold_reward,
        }
    }

    pub fn is_boss(&self) -> bool {
        self.tier == EnemyTier::Boss
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Remaining health as a fraction of maximum, clamped to `[0, 1]`.
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        (f64::from(self.hp) / f64::from(self.max_hp)).clamp(0.0, 1.0)
    }
}
