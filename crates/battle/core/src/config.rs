/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// How many times a single card may be pushed back onto the queue after a miss.
    pub max_requeues: u32,
    /// Gold staked by a low wager.
    pub wager_low: u32,
    /// Gold staked by a high wager.
    pub wager_high: u32,
    /// Poison applied every turn regardless of answers (difficulty setting).
    ///
    /// When set, overwrites whatever pending poison the resolver produced.
    pub forced_poison: Option<i32>,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Pending poison set by a timed-out answer, applied at the start of the next turn.
    pub const POISON_DAMAGE: i32 = 5;
    /// Maximum number of simultaneously active ability effects.
    pub const MAX_ACTIVE_EFFECTS: usize = 8;
    /// Minimum damage a wrong answer inflicts on the player.
    pub const MIN_ENEMY_DAMAGE: i32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_REQUEUES: u32 = 2;
    pub const DEFAULT_WAGER_LOW: u32 = 10;
    pub const DEFAULT_WAGER_HIGH: u32 = 25;

    pub fn new() -> Self {
        Self {
            max_requeues: Self::DEFAULT_MAX_REQUEUES,
            wager_low: Self::DEFAULT_WAGER_LOW,
            wager_high: Self::DEFAULT_WAGER_HIGH,
            forced_poison: None,
        }
    }

    pub fn with_forced_poison(mut self, poison: i32) -> Self {
        self.forced_poison = Some(poison);
        self
    }

    pub fn with_max_requeues(mut self, max_requeues: u32) -> Self {
        self.max_requeues = max_requeues;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
