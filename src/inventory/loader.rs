// SPDX-License-Identifier: MIT

//! Inventory loader - YAML file loading and parsing

use super::types::InventoryDefinition;
use super::Inventory;
use crate::error::{HostselError, InventoryError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the default inventory file
pub const INVENTORY_ENV: &str = "HOSTSEL_INVENTORY";

/// Loads host inventories from YAML files
pub struct InventoryLoader;

impl InventoryLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and validate an inventory from a YAML file
    pub fn load_inventory<P: AsRef<Path>>(&self, path: P) -> Result<Inventory> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(InventoryError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)?;
        let inventory = Self::parse_yaml(&content)?;
        log::debug!(
            "Loaded {} host(s) from {}",
            inventory.len(),
            path.display()
        );
        Ok(inventory)
    }

    /// Parse and validate an inventory from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Inventory> {
        let def: InventoryDefinition = serde_yaml::from_str(content)?;
        Inventory::from_hosts(def.hosts)
    }
}

impl Default for InventoryLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the inventory path: an explicit path wins over the environment
pub fn resolve_inventory_path(
    explicit: Option<PathBuf>,
    from_env: Option<String>,
) -> Result<PathBuf> {
    explicit
        .or_else(|| from_env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
        .ok_or_else(|| {
            HostselError::config(format!(
                "no inventory given; pass --inventory or set {}",
                INVENTORY_ENV
            ))
        })
}
