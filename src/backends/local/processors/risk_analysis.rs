// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::traits::{Process, ProcessInputs, ProcessResult};

/// A column is "at risk" once more than this share of its cells is missing.
pub const RISK_MISSING_RATIO: f64 = 0.2;

/// Risk analysis processor - sample data completeness risk summary
pub struct RiskAnalysisProcessor;

impl RiskAnalysisProcessor {
    pub const KIND: &'static str = "risk_analysis";
    pub const CATEGORY: &'static str = "Production";

    pub fn new() -> Self {
        Self
    }
}

impl Default for RiskAnalysisProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Process for RiskAnalysisProcessor {
    fn name(&self) -> &'static str {
        Self::KIND
    }

    fn process_data(&self, inputs: &ProcessInputs) -> ProcessResult {
        let Some(table) = inputs.data() else {
            return ProcessResult::error("No data provided");
        };

        let incomplete_rows = table
            .rows()
            .iter()
            .filter(|row| row.iter().any(|cell| cell.is_missing()))
            .count();

        let row_count = table.row_count();
        let columns_at_risk: Vec<Value> = table
            .missing_counts()
            .into_iter()
            .filter(|(_, missing)| {
                row_count > 0 && (*missing as f64 / row_count as f64) > RISK_MISSING_RATIO
            })
            .map(|(column, _)| Value::from(column))
            .collect();

        ProcessResult::outputs([
            ("row_count", Value::from(row_count)),
            ("column_count", Value::from(table.column_count())),
            ("incomplete_rows", Value::from(incomplete_rows)),
            ("columns_at_risk", Value::Array(columns_at_risk)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Cell, Table};
    use serde_json::json;

    #[test]
    fn test_flags_sparse_columns() {
        let table = Table::new(
            vec!["id".to_string(), "score".to_string(), "note".to_string()],
            vec![
                vec![Cell::Int(1), Cell::Null, Cell::Text("ok".to_string())],
                vec![Cell::Int(2), Cell::Float(0.5), Cell::Text("ok".to_string())],
                vec![Cell::Int(3), Cell::Null, Cell::Text("ok".to_string())],
                vec![Cell::Int(4), Cell::Float(0.7), Cell::Null],
                vec![Cell::Int(5), Cell::Float(0.1), Cell::Text("ok".to_string())],
            ],
        );

        let result = RiskAnalysisProcessor::new().process_data(&ProcessInputs::with_data(table));

        assert_eq!(result.output("row_count"), Some(&json!(5)));
        assert_eq!(result.output("column_count"), Some(&json!(3)));
        assert_eq!(result.output("incomplete_rows"), Some(&json!(3)));
        // score: 2/5 missing is at risk, note: 1/5 is exactly the threshold and is not
        assert_eq!(result.output("columns_at_risk"), Some(&json!(["score"])));
    }

    #[test]
    fn test_empty_table_has_no_risk() {
        let table = Table::new(vec!["a".to_string()], vec![]);
        let result = RiskAnalysisProcessor::new().process_data(&ProcessInputs::with_data(table));
        assert_eq!(result.output("columns_at_risk"), Some(&json!([])));
    }

    #[test]
    fn test_missing_data_returns_error_result() {
        let result = RiskAnalysisProcessor::new().process_data(&ProcessInputs::new());
        assert!(result.is_error());
    }
}
