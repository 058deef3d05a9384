// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};

use crate::traits::{process::DATA_INPUT, InputValue, Process, ProcessInputs, ProcessResult};

/// Quality control processor - counts missing values per column
pub struct QualityControlProcessor;

impl QualityControlProcessor {
    pub const KIND: &'static str = "quality_control";
    pub const CATEGORY: &'static str = "quality_control";

    pub fn new() -> Self {
        Self
    }
}

impl Default for QualityControlProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Process for QualityControlProcessor {
    fn name(&self) -> &'static str {
        Self::KIND
    }

    fn process_data(&self, inputs: &ProcessInputs) -> ProcessResult {
        let table = match inputs.get(DATA_INPUT) {
            Some(InputValue::Table(table)) => table,
            Some(InputValue::Value(_)) => {
                return ProcessResult::error("Input 'data' must be tabular data")
            }
            None => return ProcessResult::error("No data provided"),
        };

        let missing: Map<String, Value> = table
            .missing_counts()
            .into_iter()
            .map(|(column, count)| (column, Value::from(count)))
            .collect();

        ProcessResult::outputs([("missing_values", Value::Object(missing))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Cell, Table};
    use serde_json::json;

    #[test]
    fn test_counts_missing_values_per_column() {
        let table = Table::new(
            vec!["A".to_string(), "B".to_string()],
            vec![
                vec![Cell::Int(1), Cell::Null],
                vec![Cell::Int(2), Cell::Int(2)],
            ],
        );

        let result = QualityControlProcessor::new().process_data(&ProcessInputs::with_data(table));

        assert_eq!(result.output("missing_values"), Some(&json!({"A": 0, "B": 1})));
    }

    #[test]
    fn test_missing_data_returns_error_result() {
        let result = QualityControlProcessor::new().process_data(&ProcessInputs::new());
        assert_eq!(result, ProcessResult::error("No data provided"));
    }

    #[test]
    fn test_non_tabular_data_returns_error_result() {
        let mut inputs = ProcessInputs::new();
        inputs.insert(DATA_INPUT, InputValue::Value(json!([1, 2, 3])));
        let result = QualityControlProcessor::new().process_data(&inputs);
        assert!(result.is_error());
    }

    #[test]
    fn test_columns_keep_their_order() {
        let table = Table::new(
            vec!["zeta".to_string(), "alpha".to_string()],
            vec![vec![Cell::Null, Cell::Null]],
        );
        let result = QualityControlProcessor::new().process_data(&ProcessInputs::with_data(table));
        let keys: Vec<&String> = result
            .output("missing_values")
            .and_then(|v| v.as_object())
            .map(|m| m.keys().collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
