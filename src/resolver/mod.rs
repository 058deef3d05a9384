// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Category/process resolution.
//!
//! Groups discovered processes by category, resolves human-readable labels
//! from the configuration, and tracks the session's current selection.

mod grouping;
mod labels;
mod selection;

pub use grouping::{group_by_category, resolve_category, CategoryBucket, CategoryIndex, ProcessDescriptor};
pub use labels::{title_case, CategoryOption, Labels, ProcessOption};
pub use selection::{SelectionOutcome, SelectionState};
