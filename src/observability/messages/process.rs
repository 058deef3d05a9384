// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for process construction and invocation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Process invocation started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use process_dashboard::observability::messages::process::InvocationStarted;
///
/// let msg = InvocationStarted {
///     process_id: "quality_control_processor",
///     input_keys: 1,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct InvocationStarted<'a> {
    pub process_id: &'a str,
    pub input_keys: usize,
}

impl Display for InvocationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Process '{}' invocation started: input_keys={}",
            self.process_id, self.input_keys
        )
    }
}

impl StructuredLog for InvocationStarted<'_> {
    fn log(&self) {
        tracing::info!(
            process_id = self.process_id,
            input_keys = self.input_keys,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "process_invocation",
            span_name = name,
            process_id = self.process_id,
        )
    }
}

/// Process invocation returned a result (outputs or an error result).
///
/// # Log Level
/// `info!`, or `warn!` when the result carries an error
pub struct InvocationCompleted<'a> {
    pub process_id: &'a str,
    pub is_error: bool,
    pub duration: Duration,
}

impl Display for InvocationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let outcome = if self.is_error { "error result" } else { "outputs" };
        write!(
            f,
            "Process '{}' completed with {}: duration={:?}",
            self.process_id, outcome, self.duration
        )
    }
}

impl StructuredLog for InvocationCompleted<'_> {
    fn log(&self) {
        if self.is_error {
            tracing::warn!(
                process_id = self.process_id,
                duration_ms = self.duration.as_millis() as u64,
                "{}", self
            );
        } else {
            tracing::info!(
                process_id = self.process_id,
                duration_ms = self.duration.as_millis() as u64,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "process_invocation",
            span_name = name,
            process_id = self.process_id,
            is_error = self.is_error,
        )
    }
}

/// Process invocation failed outside the result contract (construction or panic).
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct InvocationFailed<'a> {
    pub process_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for InvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Process '{}' invocation failed: {}",
            self.process_id, self.error
        )
    }
}

impl StructuredLog for InvocationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            process_id = self.process_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "process_invocation",
            span_name = name,
            process_id = self.process_id,
        )
    }
}

/// Transient instantiation for category lookup failed; the process is filed
/// under the fallback category.
///
/// # Log Level
/// `warn!`
pub struct CategoryProbeFailed<'a> {
    pub process_id: &'a str,
    pub fallback: &'a str,
    pub reason: &'a str,
}

impl Display for CategoryProbeFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Could not instantiate process '{}' to read its category, using '{}': {}",
            self.process_id, self.fallback, self.reason
        )
    }
}

impl StructuredLog for CategoryProbeFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            process_id = self.process_id,
            fallback = self.fallback,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("category_probe", span_name = name, process_id = self.process_id)
    }
}
