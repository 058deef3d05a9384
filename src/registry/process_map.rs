// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use crate::backends::local::ProcessImplementation;

/// Result of a registry scan: process identifier → implementation.
///
/// Iterates in identifier order, independent of the order in which unit files
/// were visited, so iteration is deterministic for a given directory state.
#[derive(Debug, Clone, Default)]
pub struct ProcessMap(BTreeMap<String, ProcessImplementation>);

impl ProcessMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, identifier: String, implementation: ProcessImplementation) {
        self.0.insert(identifier, implementation);
    }

    pub fn get(&self, identifier: &str) -> Option<&ProcessImplementation> {
        self.0.get(identifier)
    }

    pub fn contains_key(&self, identifier: &str) -> bool {
        self.0.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProcessImplementation)> + '_ {
        self.0.iter().map(|(id, imp)| (id.as_str(), imp))
    }
}

impl FromIterator<(String, ProcessImplementation)> for ProcessMap {
    fn from_iter<T: IntoIterator<Item = (String, ProcessImplementation)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
