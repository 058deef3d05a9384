// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for diagnostic and
//! operational logging throughout the dashboard. Message types follow a
//! struct-based pattern with a `Display` implementation so that log text lives
//! in one place instead of as magic strings at each call site.
//!
//! Messages are organized by subsystem:
//! * `messages::registry` - process unit discovery
//! * `messages::process` - process construction and invocation
//! * `messages::session` - selection changes and dispatch decisions
//!
//! # Usage
//!
//! ```rust
//! use process_dashboard::observability::messages::registry::UnitSkipped;
//! use process_dashboard::observability::messages::StructuredLog;
//!
//! let msg = UnitSkipped {
//!     unit: "broken_process.yaml",
//!     reason: "failed to parse unit",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
