// SPDX-License-Identifier: MIT

//! Selecting hosts from a collection

use super::ast::Expression;
use super::labels::Labeled;
use super::parser::parse;

/// Parse `expression` once and return the matching entities in input order
pub fn select<'a, E, I>(entities: I, expression: &str) -> Vec<&'a E>
where
    E: Labeled + 'a,
    I: IntoIterator<Item = &'a E>,
{
    parse(expression).filter(entities)
}

impl Expression {
    /// Keep the entities this expression matches, preserving order
    pub fn filter<'a, E, I>(&self, entities: I) -> Vec<&'a E>
    where
        E: Labeled + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        entities
            .into_iter()
            .filter(|entity| {
                let selected = self.matches(*entity);
                log::trace!("Host '{}' selected: {}", entity.name(), selected);
                selected
            })
            .collect()
    }
}

/// Selector bound to a collection of hosts
#[derive(Debug)]
pub struct Selector<'a, E> {
    hosts: &'a [E],
}

impl<'a, E: Labeled> Selector<'a, E> {
    pub fn new(hosts: &'a [E]) -> Self {
        Self { hosts }
    }

    /// Hosts matching `expression`, in collection order
    pub fn select(&self, expression: &str) -> Vec<&'a E> {
        let selected = select(self.hosts, expression);
        log::debug!(
            "Selector '{}' matched {}/{} host(s)",
            expression,
            selected.len(),
            self.hosts.len()
        );
        selected
    }

    /// Like [`Selector::select`] with an already-parsed expression
    pub fn select_parsed(&self, expression: &Expression) -> Vec<&'a E> {
        expression.filter(self.hosts)
    }

    pub fn hosts(&self) -> &'a [E] {
        self.hosts
    }
}
