// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while turning an uploaded file into a [`Table`](crate::data::Table).
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Unsupported file format: '{file_name}' (expected .csv, .xlsx or .json)")]
    UnsupportedFormat { file_name: String },

    #[error("Uploaded file '{file_name}' is empty")]
    Empty { file_name: String },

    #[error("Error loading CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Error loading spreadsheet data: {0}")]
    Spreadsheet(String),

    #[error("Error loading JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error loading data: {0}")]
    Malformed(String),
}
