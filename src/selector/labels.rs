// SPDX-License-Identifier: MIT

//! Label lookup seams for selector evaluation

use super::ast::{ALL_KEY, ALL_VALUE, HOST_KEY};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only access to a key/value label set
pub trait LabelSource {
    /// Look up a label; `None` when the key is absent
    fn get_label(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> LabelSource for HashMap<String, String, S> {
    fn get_label(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl LabelSource for BTreeMap<String, String> {
    fn get_label(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Something that can be targeted by a selector: a name plus labels
pub trait Labeled {
    type Labels: LabelSource;

    /// The name matched by bare tokens (`__host__`)
    fn name(&self) -> &str;

    fn labels(&self) -> &Self::Labels;
}

/// Caller labels overlaid with the reserved `__host__` and `__all__` keys
///
/// The reserved keys always win over caller labels of the same name. The
/// underlying label set is borrowed, never copied or modified.
pub struct EffectiveLabels<'a, L: ?Sized> {
    name: &'a str,
    labels: &'a L,
}

impl<'a, L: LabelSource + ?Sized> EffectiveLabels<'a, L> {
    pub fn new(name: &'a str, labels: &'a L) -> Self {
        Self { name, labels }
    }
}

impl<L: LabelSource + ?Sized> LabelSource for EffectiveLabels<'_, L> {
    fn get_label(&self, key: &str) -> Option<&str> {
        match key {
            HOST_KEY => Some(self.name),
            ALL_KEY => Some(ALL_VALUE),
            _ => self.labels.get_label(key),
        }
    }
}
