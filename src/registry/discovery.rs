// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::{ProcessMap, UnitManifest};
use crate::backends::local::{ProcessCatalog, ProcessImplementation};
use crate::config::consts::{RESERVED_UNIT_PREFIX, TEMPLATE_UNIT_STEM, UNIT_EXTENSIONS};
use crate::errors::UnitLoadError;
use crate::observability::messages::registry::{
    AmbiguousUnit, DuplicateIdentifier, ProcessDirectoryMissing, ScanCompleted, UnitDiscovered,
    UnitSkipped,
};
use crate::observability::messages::StructuredLog;

/// Discovers process implementations from a directory of unit manifests.
///
/// Holds no cache: every [`discover`](Self::discover) call reflects the
/// directory as it is at that moment, so concurrent scans are safe.
#[derive(Debug, Clone)]
pub struct ProcessRegistry {
    directory: PathBuf,
    catalog: ProcessCatalog,
}

impl ProcessRegistry {
    pub fn new(directory: impl Into<PathBuf>, catalog: ProcessCatalog) -> Self {
        Self {
            directory: directory.into(),
            catalog,
        }
    }

    /// Registry over `directory` using the built-in catalog.
    pub fn with_builtin_catalog(directory: impl Into<PathBuf>) -> Self {
        Self::new(directory, ProcessCatalog::builtin())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn catalog(&self) -> &ProcessCatalog {
        &self.catalog
    }

    /// Scan the process directory.
    ///
    /// Units are visited in file-name order. A unit that cannot be read,
    /// parsed, or resolved to a catalog implementation is skipped. A missing
    /// directory yields an empty map.
    pub fn discover(&self) -> ProcessMap {
        let start = Instant::now();
        let directory = self.directory.display().to_string();

        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() == ErrorKind::NotFound {
                    ProcessDirectoryMissing {
                        directory: &directory,
                    }
                    .log();
                } else {
                    tracing::warn!(directory = %directory, error = %e, "Failed to read process directory");
                }
                return ProcessMap::new();
            }
        };

        let mut candidates: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_candidate_unit(path))
            .collect();
        candidates.sort();

        let mut processes = ProcessMap::new();
        let mut sources: Vec<(String, String)> = Vec::new();
        let mut skipped = 0;

        for path in candidates {
            let unit = unit_name(&path);
            let Some(identifier) = path.file_stem().map(|s| s.to_string_lossy().into_owned())
            else {
                continue;
            };

            if let Some((_, kept)) = sources.iter().find(|(id, _)| *id == identifier) {
                DuplicateIdentifier {
                    identifier: &identifier,
                    kept,
                    ignored: &unit,
                }
                .log();
                skipped += 1;
                continue;
            }

            match self.load_unit(&path) {
                Ok(implementation) => {
                    UnitDiscovered {
                        identifier: &identifier,
                        kind: implementation.kind,
                    }
                    .log();
                    sources.push((identifier.clone(), unit));
                    processes.insert(identifier, implementation);
                }
                Err(e) => {
                    UnitSkipped {
                        unit: &unit,
                        reason: &e.to_string(),
                    }
                    .log();
                    skipped += 1;
                }
            }
        }

        ScanCompleted {
            directory: &directory,
            discovered: processes.len(),
            skipped,
            duration: start.elapsed(),
        }
        .log();

        processes
    }

    /// Load one unit and pick its implementation.
    ///
    /// The first declared kind found in the catalog wins; later qualifying
    /// kinds are ignored with a warning.
    fn load_unit(&self, path: &Path) -> Result<ProcessImplementation, UnitLoadError> {
        let manifest = UnitManifest::load(path)?;

        let qualifying: Vec<&ProcessImplementation> = manifest
            .implementations
            .iter()
            .filter_map(|kind| self.catalog.get(kind))
            .collect();

        let Some((chosen, rest)) = qualifying.split_first() else {
            return Err(UnitLoadError::NoQualifyingImplementation {
                path: path.to_path_buf(),
                declared: manifest.implementations,
            });
        };

        if !rest.is_empty() {
            let ignored: Vec<&str> = rest.iter().map(|imp| imp.kind).collect();
            AmbiguousUnit {
                unit: &unit_name(path),
                chosen: chosen.kind,
                ignored: &ignored,
            }
            .log();
        }

        Ok(**chosen)
    }
}

fn unit_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A candidate is a manifest file that is neither reserved nor the template.
fn is_candidate_unit(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    let has_unit_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| UNIT_EXTENSIONS.contains(&ext))
        .unwrap_or(false);
    if !has_unit_extension {
        return false;
    }

    let file_name = unit_name(path);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    !file_name.starts_with(RESERVED_UNIT_PREFIX) && stem != TEMPLATE_UNIT_STEM
}
