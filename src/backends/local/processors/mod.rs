// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod data_profile;
pub mod quality_control;
pub mod risk_analysis;

pub use data_profile::*;
pub use quality_control::*;
pub use risk_analysis::*;
