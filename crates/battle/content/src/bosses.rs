//! Boss phase catalog.

use battle_core::{BossPhase, BossPhaseOracle};

/// Phase list of one named boss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossDefinition {
    pub name: String,
    pub phases: Vec<BossPhase>,
}

/// Boss phase lists keyed by enemy name.
///
/// Lookups are exact-name matches; unknown names have no phases.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossCatalog {
    pub bosses: Vec<BossDefinition>,
}

impl BossCatalog {
    pub fn new(bosses: Vec<BossDefinition>) -> Self {
        Self { bosses }
    }

    /// Bosses shipped with the game.
    pub fn builtin() -> Self {
        Self::new(vec![
            BossDefinition {
                name: "The Forgetting Shade".into(),
                phases: vec![
                    BossPhase::new("Veiled", "The Shade drifts at the edge of memory.", 1.0),
                    BossPhase::new("Unraveling", "Threads of thought begin to fray.", 0.66)
                        .with_damage_multiplier(1.25),
                    BossPhase::new(
                        "Oblivion",
                        "The Shade swallows every hint in darkness.",
                        0.33,
                    )
                    .with_damage_multiplier(1.5)
                    .with_xp_multiplier(1.5)
                    .without_hints(),
                ],
            },
            BossDefinition {
                name: "Archivist Prime".into(),
                phases: vec![
                    BossPhase::new("Cataloguing", "The Archivist files you away.", 1.0),
                    BossPhase::new("Purge", "Pages burn. Answers must come from you.", 0.5)
                        .with_damage_multiplier(2.0)
                        .with_xp_multiplier(1.25)
                        .without_hints(),
                ],
            },
        ])
    }

    pub fn get(&self, name: &str) -> Option<&BossDefinition> {
        self.bosses.iter().find(|boss| boss.name == name)
    }
}

impl BossPhaseOracle for BossCatalog {
    fn phases(&self, enemy_name: &str) -> &[BossPhase] {
        self.get(enemy_name)
            .map(|boss| boss.phases.as_slice())
            .unwrap_or(&[])
    }
}
