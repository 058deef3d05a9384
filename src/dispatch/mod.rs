// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Routing a selected process to its rendering path, and invoking processes.
//!
//! ```text
//! process id → HandlerTable lookup → RenderDirective
//!                 ├─ Specialized(view) → view handler → invoke() → ViewReport
//!                 └─ NotImplemented { display_name } → generic ViewReport
//! ```

mod directive;
mod invoke;
mod views;

pub use directive::{Dispatcher, HandlerTable, RenderDirective, SpecializedView};
pub use invoke::invoke;
pub(crate) use invoke::panic_message;
pub use views::{render_view, Notice, NoticeLevel, ViewContext, ViewReport};
