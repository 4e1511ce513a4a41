//! Boss catalog loader.

use std::path::Path;

use crate::bosses::BossCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for boss phase catalogs from RON files.
pub struct BossLoader;

impl BossLoader {
    /// Load a boss catalog from a RON file.
    ///
    /// Phase lists are validated to be ordered by strictly descending
    /// threshold, since phase lookup depends on that order.
    pub fn load(path: &Path) -> LoadResult<BossCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BossCatalog> {
        let catalog: BossCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse boss catalog RON: {}", e))?;

        for boss in &catalog.bosses {
            if boss.phases.is_empty() {
                anyhow::bail!("Boss '{}' has no phases", boss.name);
            }
            let ordered = boss
                .phases
                .windows(2)
                .all(|pair| pair[0].hp_threshold > pair[1].hp_threshold);
            if !ordered {
                anyhow::bail!(
                    "Boss '{}' phases must be ordered by descending hp_threshold",
                    boss.name
                );
            }
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use battle_core::BossPhaseOracle;

    use super::*;

    const CATALOG: &str = r#"(
    bosses: [
        (
            name: "Quiz Hydra",
            phases: [
                (name: "Calm", description: "Three heads doze.", hp_threshold: 1.0),
                (
                    name: "Frenzy",
                    description: "Every head asks at once.",
                    hp_threshold: 0.4,
                    damage_multiplier: 1.5,
                    hints_disabled: true,
                ),
            ],
        ),
    ],
)"#;

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = BossLoader::load(file.path()).unwrap();
        let phases = catalog.phases("Quiz Hydra");

        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].damage_multiplier, 1.0);
        assert_eq!(phases[1].damage_multiplier, 1.5);
        assert_eq!(phases[1].xp_multiplier, 1.0);
        assert!(phases[1].hints_disabled);
    }

    #[test]
    fn bundled_catalog_matches_builtin_shade() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/bosses.ron");

        let catalog = BossLoader::load(&path).unwrap();

        assert_eq!(
            catalog.phases("The Forgetting Shade"),
            BossCatalog::builtin().phases("The Forgetting Shade")
        );
    }

    #[test]
    fn rejects_unordered_phases() {
        let content = r#"(bosses: [(name: "Backwards", phases: [
            (name: "Low", description: "", hp_threshold: 0.3),
            (name: "High", description: "", hp_threshold: 1.0),
        ])])"#;

        let err = BossLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("descending"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BossLoader::load(&dir.path().join("missing.ron")).is_err());
    }
}
