// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for selection changes and dispatch decisions.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A selection was cleared because it no longer matches the discovered processes.
///
/// # Log Level
/// `info!`
///
/// # Example
/// ```
/// use process_dashboard::observability::messages::session::SelectionCleared;
///
/// let msg = SelectionCleared {
///     field: "process",
///     value: "old_process",
///     reason: "not in category 'quality_control'",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct SelectionCleared<'a> {
    pub field: &'a str,
    pub value: &'a str,
    pub reason: &'a str,
}

impl Display for SelectionCleared<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Cleared selected {} '{}': {}",
            self.field, self.value, self.reason
        )
    }
}

impl StructuredLog for SelectionCleared<'_> {
    fn log(&self) {
        tracing::info!(
            field = self.field,
            value = self.value,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("selection", span_name = name, field = self.field)
    }
}

/// The dispatcher picked a rendering path for a process.
///
/// # Log Level
/// `debug!`
pub struct DirectiveResolved<'a> {
    pub process_id: &'a str,
    pub directive: &'a str,
}

impl Display for DirectiveResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Process '{}' dispatched to {}",
            self.process_id, self.directive
        )
    }
}

impl StructuredLog for DirectiveResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            process_id = self.process_id,
            directive = self.directive,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("dispatch", span_name = name, process_id = self.process_id)
    }
}
