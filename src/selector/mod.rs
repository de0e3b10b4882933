// SPDX-License-Identifier: MIT

//! Host selector expressions
//!
//! A selector is a comma-separated list of groups; a group is an
//! `&`-separated list of clauses:
//! - `web1` - host alias equals `web1`
//! - `env=prod`, `role!=db` - label equality / inequality
//! - `all` - every host
//!
//! A host is selected when every clause of at least one group holds.

mod ast;
mod evaluator;
mod labels;
mod parser;
mod select;

pub use ast::{
    Condition, ConditionGroup, Expression, Operator, ALL_KEY, ALL_KEYWORD, ALL_VALUE, HOST_KEY,
};
pub use evaluator::{condition_holds, matches};
pub use labels::{EffectiveLabels, LabelSource, Labeled};
pub use parser::parse;
pub use select::{select, Selector};
