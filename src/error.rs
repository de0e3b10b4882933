// SPDX-License-Identifier: MIT

//! Typed error handling for hostsel
//!
//! Parsing and evaluating selectors never fails; these errors come from
//! loading and validating host inventories and from rendering parsed
//! expressions as JSON.

use thiserror::Error;

/// Top-level error type for hostsel
#[derive(Debug, Error)]
pub enum HostselError {
    /// Inventory validation errors
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Configuration errors (missing env vars, bad CLI input)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization errors (`explain` output)
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Inventory-specific errors
#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    /// A host was declared without an alias
    #[error("Host at position {0} has an empty alias")]
    EmptyAlias(usize),

    /// Two hosts share the same alias
    #[error("Duplicate host alias: {0}")]
    DuplicateAlias(String),

    /// Inventory file does not exist
    #[error("Inventory file not found: {0}")]
    FileNotFound(String),

    /// A label with an empty key
    #[error("Host '{0}' has a label with an empty key")]
    InvalidLabel(String),
}

impl HostselError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, HostselError>;
