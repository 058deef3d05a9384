// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod catalog;
pub mod processors;

pub use catalog::{ProcessCatalog, ProcessConstructor, ProcessImplementation};
pub use processors::*;
