// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading a single process unit manifest.
//!
//! These never escape a registry scan: a unit that fails to load is logged
//! and excluded from the result.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnitLoadError {
    #[error("failed to read unit '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse unit '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unit '{}' declares no implementation registered in the catalog (declared: [{}])", path.display(), declared.join(", "))]
    NoQualifyingImplementation { path: PathBuf, declared: Vec<String> },
}
