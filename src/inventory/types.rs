// SPDX-License-Identifier: MIT

//! YAML schema types for host inventories

use crate::selector::Labeled;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level inventory file
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct InventoryDefinition {
    #[serde(default)]
    pub hosts: Vec<Host>,
}

/// A host entry
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Host {
    /// Name matched by bare selector tokens
    pub alias: String,
    /// Connection address; defaults to the alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl Host {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            hostname: None,
            labels: BTreeMap::new(),
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn hostname(&self) -> &str {
        self.hostname.as_deref().unwrap_or(&self.alias)
    }
}

impl Labeled for Host {
    type Labels = BTreeMap<String, String>;

    fn name(&self) -> &str {
        &self.alias
    }

    fn labels(&self) -> &Self::Labels {
        &self.labels
    }
}
