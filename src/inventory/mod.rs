// SPDX-License-Identifier: MIT

//! Host inventories
//!
//! An inventory is an ordered, validated list of [`Host`]s loaded from
//! YAML. Selectors run against it in declaration order.

mod loader;
mod types;

pub use loader::{resolve_inventory_path, InventoryLoader, INVENTORY_ENV};
pub use types::{Host, InventoryDefinition};

use crate::error::{InventoryError, Result};
use crate::selector::{Expression, Selector, ALL_KEY, HOST_KEY};
use std::collections::HashSet;

/// Validated, ordered host collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    hosts: Vec<Host>,
}

impl Inventory {
    /// Build an inventory, rejecting empty or duplicate aliases and empty
    /// label keys
    pub fn from_hosts(hosts: Vec<Host>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (index, host) in hosts.iter().enumerate() {
            if host.alias.trim().is_empty() {
                return Err(InventoryError::EmptyAlias(index).into());
            }
            if !seen.insert(host.alias.as_str()) {
                return Err(InventoryError::DuplicateAlias(host.alias.clone()).into());
            }
            if host.labels.keys().any(|key| key.is_empty()) {
                return Err(InventoryError::InvalidLabel(host.alias.clone()).into());
            }
            for reserved in [HOST_KEY, ALL_KEY] {
                if host.labels.contains_key(reserved) {
                    log::warn!(
                        "Host '{}' defines reserved label '{}'; it will be ignored by selectors",
                        host.alias,
                        reserved
                    );
                }
            }
        }
        Ok(Self { hosts })
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn get(&self, alias: &str) -> Option<&Host> {
        self.hosts.iter().find(|host| host.alias == alias)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Host> {
        self.hosts.iter()
    }

    pub fn selector(&self) -> Selector<'_, Host> {
        Selector::new(&self.hosts)
    }

    /// Hosts matching `expression`, in inventory order
    pub fn select(&self, expression: &str) -> Vec<&Host> {
        self.selector().select(expression)
    }

    pub fn select_parsed(&self, expression: &Expression) -> Vec<&Host> {
        self.selector().select_parsed(expression)
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Host;
    type IntoIter = std::slice::Iter<'a, Host>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}
