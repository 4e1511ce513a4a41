//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config: BattleConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "forced_poison = 2\nwager_high = 40").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.forced_poison, Some(2));
        assert_eq!(config.wager_high, 40);
        assert_eq!(config.wager_low, BattleConfig::DEFAULT_WAGER_LOW);
        assert_eq!(config.max_requeues, BattleConfig::DEFAULT_MAX_REQUEUES);
    }

    #[test]
    fn bundled_config_is_the_default() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/battle.toml");

        assert_eq!(ConfigLoader::load(&path).unwrap(), BattleConfig::default());
    }
}
