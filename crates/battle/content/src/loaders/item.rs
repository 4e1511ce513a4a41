//! Equipment catalog loader.

use std::path::Path;

use battle_core::EquippedItem;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<EquippedItem>,
}

/// Loader for equipment catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// Effect texts are kept verbatim; decoding happens in
    /// [`battle_core::parse_equipment_effects`], which tolerates unknown text.
    pub fn load(path: &Path) -> LoadResult<Vec<EquippedItem>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}
