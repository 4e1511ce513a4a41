//! Simulator configuration from the process environment.
use std::env;
use std::path::PathBuf;

/// Where the simulator finds its inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimConfig {
    /// Encounter script (RON). Required.
    pub script: Option<PathBuf>,
    /// Battle tuning (TOML). Built-in defaults when unset.
    pub battle_config: Option<PathBuf>,
    /// Boss catalog (RON). Built-in bosses when unset.
    pub bosses: Option<PathBuf>,
    /// Seed for critical-hit rolls.
    pub seed: u64,
}

impl SimConfig {
    pub const DEFAULT_SEED: u64 = 0x5eed;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SCRIPT` - Encounter script path
    /// - `BATTLE_CONFIG` - Battle tuning TOML path (default: built-in)
    /// - `BATTLE_BOSSES` - Boss catalog RON path (default: built-in)
    /// - `BATTLE_SEED` - Crit roll seed (default: 0x5eed)
    pub fn from_env() -> Self {
        Self {
            script: env::var("BATTLE_SCRIPT").ok().map(PathBuf::from),
            battle_config: env::var("BATTLE_CONFIG").ok().map(PathBuf::from),
            bosses: env::var("BATTLE_BOSSES").ok().map(PathBuf::from),
            seed: read_env::<u64>("BATTLE_SEED").unwrap_or(Self::DEFAULT_SEED),
        }
    }

    /// A script path given on the command line wins over `BATTLE_SCRIPT`.
    #[must_use]
    pub fn with_script_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.script = Some(PathBuf::from(path));
        }
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
