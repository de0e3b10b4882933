// SPDX-License-Identifier: MIT

//! hostsel: a small selector language for targeting labeled hosts
//!
//! Expressions like `env=prod&role!=db, all` are parsed once into an
//! [`Expression`] and evaluated against each host's labels.

pub mod error;
pub mod inventory;
pub mod selector;

pub use error::{HostselError, InventoryError, Result};
pub use inventory::{Host, Inventory, InventoryLoader};
pub use selector::{
    matches, parse, select, Condition, ConditionGroup, EffectiveLabels, Expression, LabelSource,
    Labeled, Operator, Selector, ALL_KEY, HOST_KEY,
};
