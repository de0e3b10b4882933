// SPDX-License-Identifier: MIT

//! Selector expression evaluator

use super::ast::{Condition, ConditionGroup, Expression, Operator};
use super::labels::{EffectiveLabels, LabelSource, Labeled};

/// Evaluate an expression against a host's labels
///
/// `entity_name` is exposed as `__host__`, and `__all__` is always `yes`.
/// An expression with no groups matches nothing.
pub fn matches<L: LabelSource + ?Sized>(expr: &Expression, labels: &L, entity_name: &str) -> bool {
    let view = EffectiveLabels::new(entity_name, labels);
    expr.groups().iter().any(|group| group_matches(group, &view))
}

fn group_matches<L: LabelSource + ?Sized>(group: &ConditionGroup, labels: &L) -> bool {
    !group.is_empty()
        && group
            .conditions()
            .iter()
            .all(|condition| condition_holds(condition, labels))
}

/// Test one condition against an already-effective label view
pub fn condition_holds<L: LabelSource + ?Sized>(condition: &Condition, labels: &L) -> bool {
    let actual = labels.get_label(condition.key());
    match condition.op() {
        Operator::Equals => match actual {
            Some(value) => value == condition.value(),
            None => false,
        },
        Operator::NotEquals => match actual {
            Some(value) => value != condition.value(),
            None => true,
        },
    }
}

impl Expression {
    /// Whether this expression selects the given entity
    pub fn matches<E: Labeled + ?Sized>(&self, entity: &E) -> bool {
        matches(self, entity.labels(), entity.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::parser::parse;
    use std::collections::HashMap;

    fn labels(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn check(input: &str, pairs: &[(&str, &str)], name: &str) -> bool {
        matches(&parse(input), &labels(pairs), name)
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(check("all", &[], "web1"));
        assert!(check("all", &[("env", "prod")], ""));
    }

    #[test]
    fn test_bare_host() {
        assert!(check("web1", &[], "web1"));
        assert!(!check("web1", &[], "web2"));
    }

    #[test]
    fn test_equality() {
        assert!(check("env=prod", &[("env", "prod")], "h"));
        assert!(!check("env=prod", &[("env", "staging")], "h"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!check("env=prod", &[("env", "Prod")], "h"));
        assert!(!check("Web1", &[], "web1"));
    }

    #[test]
    fn test_and_semantics() {
        let input = "env=prod&role=web";
        assert!(check(input, &[("env", "prod"), ("role", "web")], "h"));
        assert!(!check(input, &[("env", "staging"), ("role", "web")], "h"));
        assert!(!check(input, &[("env", "prod"), ("role", "db")], "h"));
    }

    #[test]
    fn test_or_semantics() {
        assert!(check("env=prod,env=staging", &[("env", "staging")], "h"));
        assert!(check("env=prod,env=staging", &[("env", "prod")], "h"));
        assert!(!check("env=prod,env=staging", &[("env", "dev")], "h"));
    }

    #[test]
    fn test_missing_label() {
        assert!(check("role!=db", &[("env", "prod")], "h"));
        assert!(!check("role=db", &[("env", "prod")], "h"));
    }

    #[test]
    fn test_not_equal_present_label() {
        assert!(!check("role!=db", &[("role", "db")], "h"));
        assert!(check("role!=db", &[("role", "web")], "h"));
    }

    #[test]
    fn test_empty_label_value_is_not_absent() {
        assert!(!check("role!=db", &[("role", "db")], "h"));
        assert!(check("role!=db", &[("role", "")], "h"));
    }

    #[test]
    fn test_value_with_operator_characters() {
        assert!(check("tag=a=b", &[("tag", "a=b")], "h"));
        assert!(!check("tag=a=b", &[("tag", "a")], "h"));
    }

    #[test]
    fn test_reserved_label_keys() {
        assert!(check("__host__=web1", &[], "web1"));
        assert!(check("__all__=yes", &[], "anything"));
        assert!(check("web1", &[("__host__", "other")], "web1"));
        assert!(check("all", &[("__all__", "no")], "web1"));
    }

    #[test]
    fn test_empty_expression_matches_only_unnamed() {
        assert!(!check("", &[("env", "prod")], "web1"));
        assert!(check("", &[], ""));
        assert!(!check("env=prod&", &[("env", "prod")], "web1"));
    }

    #[test]
    fn test_zero_groups_match_nothing() {
        let expr = Expression::new(vec![]);
        assert!(!matches(&expr, &labels(&[]), "web1"));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let expr = parse("env=prod&role!=db");
        let map = labels(&[("env", "prod")]);
        assert_eq!(matches(&expr, &map, "h"), matches(&expr, &map, "h"));
    }

    #[test]
    fn test_condition_holds() {
        let map = labels(&[("env", "prod")]);
        assert!(condition_holds(
            &Condition::new(Operator::Equals, "env", "prod"),
            &map
        ));
        assert!(condition_holds(
            &Condition::new(Operator::NotEquals, "role", "db"),
            &map
        ));
    }
}
