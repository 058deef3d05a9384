// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};

use crate::data::{Cell, Table};
use crate::traits::{Process, ProcessInputs, ProcessResult};

/// Data profile processor - row/column counts and inferred column types.
///
/// Declares no type-level category; each instance reports the category it was
/// built with.
pub struct DataProfileProcessor {
    category: String,
}

impl DataProfileProcessor {
    pub const KIND: &'static str = "data_profile";
    pub const DEFAULT_CATEGORY: &'static str = "Production";

    pub fn new() -> Self {
        Self::with_category(Self::DEFAULT_CATEGORY)
    }

    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Default for DataProfileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Type name for a column, ignoring missing cells. Mixed int/float widens to float.
fn column_type(table: &Table, index: usize) -> &'static str {
    let mut seen: Option<&'static str> = None;
    for cell in table.column(index).filter(|c| !c.is_missing()) {
        let current = cell.type_name();
        seen = match seen {
            None => Some(current),
            Some(prev) if prev == current => Some(prev),
            Some("int") | Some("float") if matches!(cell, Cell::Int(_) | Cell::Float(_)) => {
                Some("float")
            }
            Some(_) => return "mixed",
        };
    }
    seen.unwrap_or("null")
}

impl Process for DataProfileProcessor {
    fn name(&self) -> &'static str {
        Self::KIND
    }

    fn category(&self) -> Option<String> {
        Some(self.category.clone())
    }

    fn process_data(&self, inputs: &ProcessInputs) -> ProcessResult {
        let Some(table) = inputs.data() else {
            return ProcessResult::error("No data provided");
        };

        let column_types: Map<String, Value> = table
            .columns()
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), Value::from(column_type(table, i))))
            .collect();

        ProcessResult::outputs([
            ("row_count", Value::from(table.row_count())),
            ("column_count", Value::from(table.column_count())),
            ("column_types", Value::Object(column_types)),
        ])
    }
}
