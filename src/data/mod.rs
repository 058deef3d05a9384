// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Uniform in-memory tabular representation handed to processes.
//!
//! Every supported upload format (CSV, XLSX, JSON) is converted into a
//! [`Table`] before a process ever sees it, so processes only deal with one
//! shape of data.

mod loader;
mod table;

pub use loader::{load_table, DataFormat, Upload};
pub use table::{Cell, Table};
