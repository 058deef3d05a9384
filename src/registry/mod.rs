// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Process discovery.
//!
//! The registry scans a designated directory for unit manifests. Each unit's
//! file stem becomes a process identifier, and the implementation kinds it
//! declares are checked against the build-time [`ProcessCatalog`]. Units that
//! fail to load are skipped without failing the scan.
//!
//! ```text
//! processes/*.yaml → UnitManifest → ProcessCatalog lookup → ProcessMap
//! ```
//!
//! [`ProcessCatalog`]: crate::backends::local::ProcessCatalog

mod discovery;
mod process_map;
mod unit;

#[cfg(test)]
mod integration_tests;

pub use discovery::ProcessRegistry;
pub use process_map::ProcessMap;
pub use unit::UnitManifest;
