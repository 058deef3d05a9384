// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod data;
mod process;
mod unit;

pub use config::ConfigError;
pub use data::DataLoadError;
pub use process::{InvocationError, ProcessError};
pub use unit::UnitLoadError;
