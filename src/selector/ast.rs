// SPDX-License-Identifier: MIT

//! Parsed form of selector expressions

use serde::Serialize;

/// Reserved label bound to the host's own alias
pub const HOST_KEY: &str = "__host__";

/// Reserved label present on every host with the value [`ALL_VALUE`]
pub const ALL_KEY: &str = "__all__";

/// Value of the [`ALL_KEY`] label
pub const ALL_VALUE: &str = "yes";

/// Keyword that selects every host
pub const ALL_KEYWORD: &str = "all";

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// `=`
    #[serde(rename = "=")]
    Equals,
    /// `!=`
    #[serde(rename = "!=")]
    NotEquals,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `key op value` test against a host's labels
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Condition {
    op: Operator,
    key: String,
    value: String,
}

impl Condition {
    pub fn new(op: Operator, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            op,
            key: key.into(),
            value: value.into(),
        }
    }

    /// The condition produced by the `all` keyword
    pub fn all() -> Self {
        Self::new(Operator::Equals, ALL_KEY, ALL_VALUE)
    }

    /// Host alias equality, produced by a bare token
    pub fn host(alias: impl Into<String>) -> Self {
        Self::new(Operator::Equals, HOST_KEY, alias)
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_all(&self) -> bool {
        self.op == Operator::Equals && self.key == ALL_KEY && self.value == ALL_VALUE
    }

    pub fn is_host(&self) -> bool {
        self.op == Operator::Equals && self.key == HOST_KEY
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_all() {
            f.write_str(ALL_KEYWORD)
        } else if self.is_host() {
            f.write_str(&self.value)
        } else if self.op == Operator::Equals && self.key.ends_with('!') {
            // keep `a! =b` from reading back as `a != b`
            write!(f, "{} {}{}", self.key, self.op, self.value)
        } else {
            write!(f, "{}{}{}", self.key, self.op, self.value)
        }
    }
}

/// Conditions that must all hold (joined with `&`)
///
/// Never empty: the parser emits at least one condition per group and
/// [`ConditionGroup::new`] rejects an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConditionGroup {
    conditions: Vec<Condition>,
}

impl ConditionGroup {
    /// Build a group, returning `None` for an empty condition list
    pub fn new(conditions: Vec<Condition>) -> Option<Self> {
        if conditions.is_empty() {
            None
        } else {
            Some(Self { conditions })
        }
    }

    pub(crate) fn from_parsed(conditions: Vec<Condition>) -> Self {
        debug_assert!(!conditions.is_empty());
        Self { conditions }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Always false; provided alongside `len`
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl std::fmt::Display for ConditionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}", condition)?;
        }
        Ok(())
    }
}

/// Groups of which at least one must hold (joined with `,`)
///
/// `Display` writes a selector string that parses back to an equal
/// expression for anything produced by [`parse`](super::parse).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Expression {
    groups: Vec<ConditionGroup>,
}

impl Expression {
    pub fn new(groups: Vec<ConditionGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[ConditionGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// An expression with no groups matches nothing
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Pretty-printed JSON form of the parsed structure
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}
