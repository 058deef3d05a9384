// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Configuration file loaded when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "configs/app_config.yaml";

/// Directory scanned for process unit manifests.
pub const DEFAULT_PROCESSES_DIR: &str = "processes";

/// Unit file names starting with this prefix are never discovered.
pub const RESERVED_UNIT_PREFIX: &str = "__";

/// Template unit shipped for authors to copy; never discovered.
pub const TEMPLATE_UNIT_STEM: &str = "process_template";

/// Extensions recognised as unit manifests.
pub const UNIT_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Category assigned when neither the type nor an instance declares one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Description shown when the configuration has none for a process.
pub const NO_DESCRIPTION: &str = "No description available";

/// Rows shown in a data preview.
pub const PREVIEW_ROWS: usize = 10;
