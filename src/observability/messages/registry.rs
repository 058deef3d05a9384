// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for process unit discovery.
//!
//! This module contains message types for logging events related to:
//! * Scanning the process directory
//! * Units excluded because they failed to load
//! * Ambiguous or duplicate units

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Process directory scan completed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use process_dashboard::observability::messages::registry::ScanCompleted;
/// use process_dashboard::observability::messages::StructuredLog;
/// use std::time::Duration;
///
/// let msg = ScanCompleted {
///     directory: "processes",
///     discovered: 3,
///     skipped: 1,
///     duration: Duration::from_millis(2),
/// };
///
/// msg.log();
/// ```
pub struct ScanCompleted<'a> {
    pub directory: &'a str,
    pub discovered: usize,
    pub skipped: usize,
    pub duration: Duration,
}

impl Display for ScanCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Process scan of '{}' completed: discovered={}, skipped={}, duration={:?}",
            self.directory, self.discovered, self.skipped, self.duration
        )
    }
}

impl StructuredLog for ScanCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            directory = self.directory,
            discovered = self.discovered,
            skipped = self.skipped,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "process_scan",
            span_name = name,
            directory = self.directory,
            discovered = self.discovered,
            skipped = self.skipped,
        )
    }
}

/// Process directory does not exist; the scan yields nothing.
///
/// # Log Level
/// `debug!`
pub struct ProcessDirectoryMissing<'a> {
    pub directory: &'a str,
}

impl Display for ProcessDirectoryMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Process directory '{}' does not exist, no processes discovered",
            self.directory
        )
    }
}

impl StructuredLog for ProcessDirectoryMissing<'_> {
    fn log(&self) {
        tracing::debug!(directory = self.directory, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("process_scan", span_name = name, directory = self.directory)
    }
}

/// Candidate unit failed to load and was excluded.
///
/// # Log Level
/// `debug!` - unit load failures are silent to the user by design of the scan
///
/// # Example
/// ```
/// use process_dashboard::observability::messages::registry::UnitSkipped;
///
/// let msg = UnitSkipped {
///     unit: "broken.yaml",
///     reason: "failed to parse unit",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct UnitSkipped<'a> {
    pub unit: &'a str,
    pub reason: &'a str,
}

impl Display for UnitSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping process unit '{}': {}", self.unit, self.reason)
    }
}

impl StructuredLog for UnitSkipped<'_> {
    fn log(&self) {
        tracing::debug!(unit = self.unit, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("process_unit", span_name = name, unit = self.unit)
    }
}

/// Unit loaded and resolved to an implementation.
pub struct UnitDiscovered<'a> {
    pub identifier: &'a str,
    pub kind: &'a str,
}

impl Display for UnitDiscovered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Discovered process '{}' (implementation '{}')",
            self.identifier, self.kind
        )
    }
}

impl StructuredLog for UnitDiscovered<'_> {
    fn log(&self) {
        tracing::debug!(identifier = self.identifier, kind = self.kind, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "process_unit",
            span_name = name,
            identifier = self.identifier,
            kind = self.kind,
        )
    }
}

/// Unit declares more than one qualifying implementation; the first one wins.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct AmbiguousUnit<'a> {
    pub unit: &'a str,
    pub chosen: &'a str,
    pub ignored: &'a [&'a str],
}

impl Display for AmbiguousUnit<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Process unit '{}' declares several implementations; using '{}' and ignoring [{}]",
            self.unit,
            self.chosen,
            self.ignored.join(", ")
        )
    }
}

impl StructuredLog for AmbiguousUnit<'_> {
    fn log(&self) {
        tracing::warn!(
            unit = self.unit,
            chosen = self.chosen,
            ignored = self.ignored.join(", "),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "process_unit",
            span_name = name,
            unit = self.unit,
            chosen = self.chosen,
        )
    }
}

/// Two units share a stem (e.g. `x.yaml` and `x.yml`); the first one wins.
///
/// # Log Level
/// `warn!`
pub struct DuplicateIdentifier<'a> {
    pub identifier: &'a str,
    pub kept: &'a str,
    pub ignored: &'a str,
}

impl Display for DuplicateIdentifier<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Duplicate process identifier '{}': keeping '{}', ignoring '{}'",
            self.identifier, self.kept, self.ignored
        )
    }
}

impl StructuredLog for DuplicateIdentifier<'_> {
    fn log(&self) {
        tracing::warn!(
            identifier = self.identifier,
            kept = self.kept,
            ignored = self.ignored,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("process_unit", span_name = name, identifier = self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_unit_lists_ignored_kinds() {
        let ignored = ["risk_analysis", "data_profile"];
        let msg = AmbiguousUnit {
            unit: "combo.yaml",
            chosen: "quality_control",
            ignored: &ignored,
        };
        assert_eq!(
            msg.to_string(),
            "Process unit 'combo.yaml' declares several implementations; using 'quality_control' and ignoring [risk_analysis, data_profile]"
        );
    }

    #[test]
    fn test_unit_skipped_message() {
        let msg = UnitSkipped {
            unit: "broken.yaml",
            reason: "bad yaml",
        };
        assert_eq!(msg.to_string(), "Skipping process unit 'broken.yaml': bad yaml");
    }
}
