// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Presentation-neutral view handlers.
//!
//! A handler turns a directive plus the user's upload into a [`ViewReport`];
//! the front end decides how to draw it.

use super::{invoke, SpecializedView};
use crate::backends::local::ProcessImplementation;
use crate::config::consts::PREVIEW_ROWS;
use crate::data::{Table, Upload};
use crate::resolver::Labels;
use crate::traits::{ProcessInputs, ProcessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Everything a front end needs to draw one view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewReport {
    pub title: String,
    pub description: Option<String>,
    pub preview: Option<Table>,
    pub notices: Vec<Notice>,
    pub result: Option<ProcessResult>,
}

impl ViewReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            preview: None,
            notices: Vec::new(),
            result: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(|n| n.level == NoticeLevel::Error)
    }

    /// Standard page for a process with no dedicated view.
    pub fn not_implemented(display_name: &str) -> Self {
        let mut report = Self::new(display_name);
        report.notice(NoticeLevel::Warning, "Not Yet Implemented");
        report.notice(NoticeLevel::Info, "This process does not have a dedicated view yet.");
        report.notice(NoticeLevel::Info, "Please check back later for updates.");
        report
    }

    pub fn no_selection() -> Self {
        let mut report = Self::new("No process selected");
        report.notice(NoticeLevel::Info, "Please choose a category and a process.");
        report
    }
}

/// The selected process as seen by a view handler.
pub struct ViewContext<'a> {
    pub process_id: &'a str,
    pub implementation: &'a ProcessImplementation,
    pub labels: &'a Labels<'a>,
}

/// Render a specialized view.
///
/// Without an upload nothing is loaded and no process runs. With an upload
/// the data is loaded and previewed; the process only runs when `run` is set.
pub fn render_view(
    view: SpecializedView,
    ctx: &ViewContext<'_>,
    upload: Option<&Upload>,
    run: bool,
) -> ViewReport {
    let (title, description) = ctx.labels.process_heading(
        view.config_category(),
        ctx.process_id,
        view.default_name(),
        view.default_description(),
    );
    let mut report = ViewReport::new(title).with_description(description);

    let Some(upload) = upload else {
        report.notice(
            NoticeLevel::Info,
            "Upload a data file (.csv, .xlsx or .json) to continue.",
        );
        return report;
    };

    let table = match upload.load() {
        Ok(table) => table,
        Err(e) => {
            report.notice(NoticeLevel::Error, e.to_string());
            return report;
        }
    };
    report.notice(
        NoticeLevel::Success,
        format!("File uploaded: {}", upload.file_name),
    );
    report.preview = Some(table.head(PREVIEW_ROWS));

    if !run {
        let hint = match view {
            SpecializedView::QualityControl => "Run the quality control check to count missing values.",
            SpecializedView::RiskAnalysis => "This is a sample risk analysis process. Run it to see a completeness summary.",
        };
        report.notice(NoticeLevel::Info, hint);
        return report;
    }

    match invoke(ctx.process_id, ctx.implementation, &ProcessInputs::with_data(table)) {
        Ok(ProcessResult::Error(message)) => report.notice(NoticeLevel::Error, message),
        Ok(result) => {
            if view == SpecializedView::QualityControl && missing_values_empty(&result) {
                report.notice(NoticeLevel::Info, "No missing values found.");
            }
            report.result = Some(result);
        }
        Err(e) => report.notice(NoticeLevel::Error, e.to_string()),
    }

    report
}

/// True when the result carries no per-column counts at all. Zero counts
/// still count as a result to show.
fn missing_values_empty(result: &ProcessResult) -> bool {
    result
        .output("missing_values")
        .and_then(|v| v.as_object())
        .map(|counts| counts.is_empty())
        .unwrap_or(true)
}
