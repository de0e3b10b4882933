// SPDX-License-Identifier: MIT

//! Selector expression parser
//!
//! Parses expressions like:
//! - `web1` (host alias)
//! - `env=prod&role!=db` (all labels must match)
//! - `stage=prod, stage=beta` (either group)
//! - `all`

use super::ast::{Condition, ConditionGroup, Expression, Operator, ALL_KEYWORD};

/// Parse a selector string
///
/// Parsing is total: clauses that are not `all` and have no `key op value`
/// split are treated as host alias tests. Newlines inside a clause are
/// ordinary characters, so `"a\nb=c"` has the key `"a\nb"`.
pub fn parse(input: &str) -> Expression {
    let groups: Vec<ConditionGroup> = input.split(',').map(parse_group).collect();
    let expr = Expression::new(groups);
    log::debug!(
        "Parsed selector '{}' into {} group(s): {}",
        input,
        expr.len(),
        expr
    );
    expr
}

fn parse_group(group: &str) -> ConditionGroup {
    ConditionGroup::from_parsed(group.split('&').map(parse_clause).collect())
}

fn parse_clause(clause: &str) -> Condition {
    let clause = clause.trim();
    if clause == ALL_KEYWORD {
        return Condition::all();
    }
    match split_comparison(clause) {
        Some((key, op, value)) => Condition::new(op, key.trim(), value.trim()),
        None => Condition::host(clause),
    }
}

/// Find the first operator that has a non-empty key before it and a
/// non-empty value after it. `!=` wins over `=` at the same position.
fn split_comparison(clause: &str) -> Option<(&str, Operator, &str)> {
    for (pos, c) in clause.char_indices().skip(1) {
        let rest = &clause[pos..];
        let (op, op_len) = if rest.starts_with("!=") {
            (Operator::NotEquals, 2)
        } else if c == '=' {
            (Operator::Equals, 1)
        } else {
            continue;
        };
        let value = &rest[op_len..];
        if value.is_empty() {
            continue;
        }
        return Some((&clause[..pos], op, value));
    }
    None
}

impl std::str::FromStr for Expression {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}
