// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised when a process implementation cannot be constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    #[error("failed to construct process '{kind}': {reason}")]
    Construction { kind: String, reason: String },
}

/// Errors caught at the invocation boundary.
///
/// Expected failures are reported by a process through
/// [`ProcessResult::Error`](crate::traits::ProcessResult); this type only
/// covers what the contract does not: an instance that cannot be built, or a
/// panic while `process_data` runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvocationError {
    #[error(transparent)]
    Construction(#[from] ProcessError),

    #[error("process '{process_id}' failed unexpectedly: {message}")]
    Panicked { process_id: String, message: String },
}
