// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Process implementations compiled into the dashboard.
//!
//! # Local Backend
//! In-process Rust processes operating on uploaded tables:
//! - **Quality control**: missing-value counts per column
//! - **Risk analysis**: data completeness risk summary
//! - **Data profile**: row/column counts and inferred column types
//!
//! Each implementation is registered in the [`ProcessCatalog`](local::ProcessCatalog).
//! A unit manifest in the process directory makes it discoverable:
//! ```text
//! processes/<identifier>.yaml → implementations: [<kind>] → ProcessCatalog → Process
//! ```
//!
//! # Examples
//!
//! ```rust
//! use process_dashboard::backends::local::ProcessCatalog;
//! use process_dashboard::data::{Cell, Table};
//! use process_dashboard::traits::{Process, ProcessInputs};
//!
//! let catalog = ProcessCatalog::builtin();
//! let process = catalog.get("quality_control").unwrap().instantiate()?;
//!
//! let table = Table::new(vec!["A".to_string()], vec![vec![Cell::Null]]);
//! let result = process.process_data(&ProcessInputs::with_data(table));
//! assert!(!result.is_error());
//! # Ok::<(), process_dashboard::errors::ProcessError>(())
//! ```

pub mod local;
