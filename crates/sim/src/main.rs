//! Offline encounter simulator.
//!
//! Replays a scripted encounter through the session controller and prints
//! the combat log and the settled rewards.
//!
//! Usage: `battle-sim [SCRIPT]` (falls back to `BATTLE_SCRIPT`).
mod config;
mod runner;
mod script;

use anyhow::{Context, Result};
use battle_content::{BossCatalog, BossLoader, ConfigLoader};
use battle_core::{BattleConfig, PcgRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::SimConfig;
use crate::script::EncounterScript;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env().with_script_arg(std::env::args().nth(1));
    let script_path = config
        .script
        .clone()
        .context("No encounter script given (pass a path or set BATTLE_SCRIPT)")?;

    let battle_config = match &config.battle_config {
        Some(path) => ConfigLoader::load(path)?,
        None => BattleConfig::default(),
    };
    let bosses = match &config.bosses {
        Some(path) => BossLoader::load(path)?,
        None => BossCatalog::builtin(),
    };
    let script = EncounterScript::load(&script_path)?;

    info!(
        script = %script_path.display(),
        enemy = %script.enemy.name,
        seed = config.seed,
        "starting simulation"
    );

    let mut rng = PcgRng::new(config.seed);
    let outcome = runner::run(&script, battle_config, &bosses, &mut rng)?;
    for line in &outcome.lines {
        println!("{line}");
    }

    Ok(())
}
