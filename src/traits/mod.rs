// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod process;

pub use process::{InputValue, Process, ProcessInputs, ProcessResult};
