//! Data-driven battle content and loaders.
//!
//! This crate houses static content and provides loaders for RON/TOML data files:
//! - Boss phase catalogs (built-in, or data-driven via RON)
//! - Equipment catalogs (data-driven via RON)
//! - Battle configuration (data-driven via TOML)
//!
//! Content is consumed by the session layer through `battle-core` oracles and
//! never appears in combat state.

pub mod bosses;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bosses::{BossCatalog, BossDefinition};

#[cfg(feature = "loaders")]
pub use loaders::{BossLoader, ConfigLoader, ItemLoader};
