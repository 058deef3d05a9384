// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The contract every process implementation satisfies.
//!
//! A process receives a mapping of named inputs and returns a
//! [`ProcessResult`]: either named outputs or an error message, never both.
//! Uploaded data always arrives under the [`DATA_INPUT`] key as a
//! [`Table`].

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::data::Table;

/// Input key carrying the uploaded table.
pub const DATA_INPUT: &str = "data";

/// A single named input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Table(Table),
    Value(serde_json::Value),
}

/// Named inputs handed to [`Process::process_data`].
#[derive(Debug, Clone, Default)]
pub struct ProcessInputs(HashMap<String, InputValue>);

impl ProcessInputs {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Inputs holding only an uploaded table under the `data` key.
    pub fn with_data(table: Table) -> Self {
        let mut inputs = Self::new();
        inputs.insert(DATA_INPUT, InputValue::Table(table));
        inputs
    }

    pub fn insert(&mut self, key: impl Into<String>, value: InputValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&InputValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The table under `key`, if present and tabular.
    pub fn table(&self, key: &str) -> Option<&Table> {
        match self.0.get(key) {
            Some(InputValue::Table(table)) => Some(table),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&Table> {
        self.table(DATA_INPUT)
    }
}

/// Outcome of a process invocation.
///
/// Serializes to either the named outputs or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessResult {
    Outputs(BTreeMap<String, serde_json::Value>),
    Error(String),
}

impl ProcessResult {
    pub fn error(message: impl Into<String>) -> Self {
        ProcessResult::Error(message.into())
    }

    pub fn outputs<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, serde_json::Value)>,
        K: Into<String>,
    {
        ProcessResult::Outputs(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ProcessResult::Error(_))
    }

    pub fn output(&self, key: &str) -> Option<&serde_json::Value> {
        match self {
            ProcessResult::Outputs(outputs) => outputs.get(key),
            ProcessResult::Error(_) => None,
        }
    }
}

impl Serialize for ProcessResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProcessResult::Outputs(outputs) => outputs.serialize(serializer),
            ProcessResult::Error(message) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", message)?;
                map.end()
            }
        }
    }
}

/// A unit of data computation registered under a category.
///
/// Implementations must not panic for expected failures such as a missing
/// input; they return [`ProcessResult::Error`] instead. Anything else is
/// caught at the invocation boundary (see [`crate::dispatch::invoke`]).
pub trait Process: Send + Sync {
    /// Catalog kind this instance was built from.
    fn name(&self) -> &'static str;

    /// Instance-level category, consulted only when the implementation does
    /// not declare one at the type level.
    fn category(&self) -> Option<String> {
        None
    }

    fn process_data(&self, inputs: &ProcessInputs) -> ProcessResult;
}
