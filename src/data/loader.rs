// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, Xlsx};

use super::{Cell, Table};
use crate::errors::DataLoadError;

/// Tokens treated as missing values in text-based uploads.
const NULL_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "#N/A", "<NA>",
];

/// Supported upload formats, detected from the file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Xlsx,
    Json,
}

impl DataFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self, DataLoadError> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".csv") {
            Ok(DataFormat::Csv)
        } else if lower.ends_with(".xlsx") {
            Ok(DataFormat::Xlsx)
        } else if lower.ends_with(".json") {
            Ok(DataFormat::Json)
        } else {
            Err(DataLoadError::UnsupportedFormat {
                file_name: file_name.to_string(),
            })
        }
    }
}

/// Raw bytes of an uploaded file together with the name it was uploaded as.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read an upload from disk, keeping only the file name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { file_name, bytes })
    }

    pub fn load(&self) -> Result<Table, DataLoadError> {
        load_table(&self.file_name, &self.bytes)
    }
}

/// Convert uploaded bytes into a [`Table`] based on the file name suffix.
pub fn load_table(file_name: &str, bytes: &[u8]) -> Result<Table, DataLoadError> {
    let format = DataFormat::from_file_name(file_name)?;
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(DataLoadError::Empty {
            file_name: file_name.to_string(),
        });
    }

    let table = match format {
        DataFormat::Csv => parse_csv(bytes)?,
        DataFormat::Xlsx => parse_xlsx(bytes)?,
        DataFormat::Json => parse_json(bytes)?,
    };

    tracing::debug!(
        file_name,
        format = ?format,
        rows = table.row_count(),
        columns = table.column_count(),
        "Loaded uploaded table"
    );
    Ok(table)
}

fn parse_csv(bytes: &[u8]) -> Result<Table, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(DataLoadError::Malformed(
            "No columns to parse from file".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(parse_text_cell).collect());
    }

    Ok(Table::new(columns, rows))
}

/// Infer a cell from a text field: integer, then float, then boolean, else text.
fn parse_text_cell(raw: &str) -> Cell {
    let field = raw.trim();
    if NULL_TOKENS.contains(&field) {
        return Cell::Null;
    }
    if let Ok(i) = field.parse::<i64>() {
        return Cell::Int(i);
    }
    if let Ok(x) = field.parse::<f64>() {
        return Cell::Float(x);
    }
    match field {
        "true" | "True" | "TRUE" => Cell::Bool(true),
        "false" | "False" | "FALSE" => Cell::Bool(false),
        _ => Cell::Text(raw.to_string()),
    }
}

fn parse_xlsx(bytes: &[u8]) -> Result<Table, DataLoadError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| DataLoadError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DataLoadError::Spreadsheet("workbook has no worksheets".to_string()))?
        .map_err(|e| DataLoadError::Spreadsheet(e.to_string()))?;

    let mut sheet_rows = range.rows();
    let header = sheet_rows
        .next()
        .ok_or_else(|| DataLoadError::Malformed("No columns to parse from file".to_string()))?;

    let columns = header
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Data::Empty => format!("Unnamed: {}", i),
            other => other.to_string(),
        })
        .collect();

    let rows = sheet_rows
        .map(|row| row.iter().map(spreadsheet_cell).collect())
        .collect();

    Ok(Table::new(columns, rows))
}

fn spreadsheet_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Null,
        Data::Int(i) => Cell::Int(*i),
        Data::Float(x) => Cell::Float(*x),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) => Cell::Text(s.clone()),
        // Dates, durations and error cells keep their rendered form
        other => Cell::Text(other.to_string()),
    }
}

fn parse_json(bytes: &[u8]) -> Result<Table, DataLoadError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    match value {
        serde_json::Value::Array(records) => json_records(&records),
        serde_json::Value::Object(columns) => json_columns(&columns),
        other => Err(DataLoadError::Malformed(format!(
            "expected an array of records or an object of columns, found {}",
            json_kind(&other)
        ))),
    }
}

/// `[{"a": 1, "b": 2}, ...]`: columns are the union of keys in first-seen order.
fn json_records(records: &[serde_json::Value]) -> Result<Table, DataLoadError> {
    let mut columns: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(records.len());

    for (i, record) in records.iter().enumerate() {
        let object = record.as_object().ok_or_else(|| {
            DataLoadError::Malformed(format!(
                "record {} is {}, expected an object",
                i,
                json_kind(record)
            ))
        })?;
        for key in object.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
        objects.push(object);
    }

    let rows = objects
        .iter()
        .map(|object| {
            columns
                .iter()
                .map(|c| object.get(c).map(Cell::from_json).unwrap_or(Cell::Null))
                .collect()
        })
        .collect();

    Ok(Table::new(columns, rows))
}

/// `{"a": {"0": 1, "1": 2}, ...}` or `{"a": [1, 2], ...}`.
fn json_columns(
    object: &serde_json::Map<String, serde_json::Value>,
) -> Result<Table, DataLoadError> {
    let columns: Vec<String> = object.keys().cloned().collect();
    let mut index: Vec<String> = Vec::new();
    let mut values: Vec<HashMap<String, Cell>> = Vec::with_capacity(columns.len());

    for (name, column) in object {
        let mut cells = HashMap::new();
        match column {
            serde_json::Value::Object(entries) => {
                for (key, value) in entries {
                    if !index.contains(key) {
                        index.push(key.clone());
                    }
                    cells.insert(key.clone(), Cell::from_json(value));
                }
            }
            serde_json::Value::Array(items) => {
                for (i, value) in items.iter().enumerate() {
                    let key = i.to_string();
                    if !index.contains(&key) {
                        index.push(key.clone());
                    }
                    cells.insert(key, Cell::from_json(value));
                }
            }
            other => {
                return Err(DataLoadError::Malformed(format!(
                    "column '{}' is {}, expected an object or array",
                    name,
                    json_kind(other)
                )))
            }
        }
        values.push(cells);
    }

    let rows = index
        .iter()
        .map(|key| {
            values
                .iter()
                .map(|cells| cells.get(key).cloned().unwrap_or(Cell::Null))
                .collect()
        })
        .collect();

    Ok(Table::new(columns, rows))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(DataFormat::from_file_name("data.csv").unwrap(), DataFormat::Csv);
        assert_eq!(DataFormat::from_file_name("Report.XLSX").unwrap(), DataFormat::Xlsx);
        assert_eq!(DataFormat::from_file_name("rows.json").unwrap(), DataFormat::Json);
        assert!(matches!(
            DataFormat::from_file_name("notes.txt"),
            Err(DataLoadError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_csv_with_missing_values() {
        let table = load_table("sample.csv", b"A,B\n1,\n2,2\n").unwrap();
        assert_eq!(table.columns(), &["A".to_string(), "B".to_string()]);
        assert_eq!(table.rows()[0], vec![Cell::Int(1), Cell::Null]);
        assert_eq!(table.rows()[1], vec![Cell::Int(2), Cell::Int(2)]);
    }

    #[test]
    fn test_csv_infers_cell_types() {
        let table = load_table("types.csv", b"i,f,b,t,n\n3,2.5,true,hello,NA\n").unwrap();
        assert_eq!(
            table.rows()[0],
            vec![
                Cell::Int(3),
                Cell::Float(2.5),
                Cell::Bool(true),
                Cell::Text("hello".to_string()),
                Cell::Null,
            ]
        );
    }

    #[test]
    fn test_csv_ragged_rows_are_padded() {
        let table = load_table("ragged.csv", b"a,b,c\n1,2\n").unwrap();
        assert_eq!(table.rows()[0][2], Cell::Null);
    }

    #[test]
    fn test_empty_upload_is_an_error() {
        let err = load_table("empty.csv", b"").unwrap_err();
        assert!(matches!(err, DataLoadError::Empty { .. }));
    }

    #[test]
    fn test_json_records_union_columns() {
        let json = br#"[{"A": 1, "B": null}, {"A": 2, "B": 2, "C": "x"}]"#;
        let table = load_table("rows.json", json).unwrap();
        assert_eq!(
            table.columns(),
            &["A".to_string(), "B".to_string(), "C".to_string()]
        );
        assert_eq!(table.rows()[0], vec![Cell::Int(1), Cell::Null, Cell::Null]);
        assert_eq!(table.missing_counts()[1], ("B".to_string(), 1));
    }

    #[test]
    fn test_json_columns_orientation() {
        let json = br#"{"A": {"0": 1, "1": 2}, "B": {"0": null, "1": 2}}"#;
        let table = load_table("cols.json", json).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.missing_counts(),
            vec![("A".to_string(), 0), ("B".to_string(), 1)]
        );

        let json = br#"{"A": [1, 2], "B": [null, 2]}"#;
        let table = load_table("cols.json", json).unwrap();
        assert_eq!(table.rows()[0], vec![Cell::Int(1), Cell::Null]);
    }

    #[test]
    fn test_json_scalar_is_malformed() {
        let err = load_table("scalar.json", b"42").unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed(_)));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = load_table("broken.json", b"{not json").unwrap_err();
        assert!(matches!(err, DataLoadError::Json(_)));
        assert!(err.to_string().starts_with("Error loading JSON data"));
    }

    #[test]
    fn test_garbage_spreadsheet_is_reported() {
        let err = load_table("book.xlsx", b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, DataLoadError::Spreadsheet(_)));
    }
}
