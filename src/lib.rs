// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // built-in process implementations + catalog
pub mod config;     // dashboard configuration
pub mod data;       // uploaded tables
pub mod dispatch;   // directives, views, invocation boundary
pub mod errors;     // error handling
pub mod observability;
pub mod registry;   // process unit discovery
pub mod resolver;   // categories, labels, selection
pub mod session;
pub mod traits;     // process contract
