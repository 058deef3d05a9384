// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One interactive session.
//!
//! Each user interaction runs one synchronous cycle:
//!
//! ```text
//! refresh():  ProcessRegistry::discover → group_by_category → SelectionState::reconcile
//! render():   SelectionState → Dispatcher::dispatch → view handler → ViewReport
//! ```
//!
//! The configuration is borrowed for the session's lifetime and never
//! mutated. Selection state belongs to the session, so independent sessions
//! never see each other's choices.

use crate::config::AppConfig;
use crate::data::Upload;
use crate::dispatch::{render_view, Dispatcher, HandlerTable, RenderDirective, ViewContext, ViewReport};
use crate::registry::ProcessRegistry;
use crate::resolver::{
    group_by_category, CategoryIndex, CategoryOption, Labels, SelectionOutcome, SelectionState,
};

pub struct Session<'a> {
    labels: Labels<'a>,
    registry: ProcessRegistry,
    dispatcher: Dispatcher<'a>,
    index: CategoryIndex,
    selection: SelectionState,
    seeded: bool,
}

impl<'a> Session<'a> {
    /// New session using the built-in handler table.
    pub fn new(config: &'a AppConfig, registry: ProcessRegistry) -> Self {
        let labels = Labels::new(config);
        Self::with_dispatcher(config, registry, Dispatcher::new(HandlerTable::builtin(), labels))
    }

    pub fn with_dispatcher(
        config: &'a AppConfig,
        registry: ProcessRegistry,
        dispatcher: Dispatcher<'a>,
    ) -> Self {
        Self {
            labels: Labels::new(config),
            registry,
            dispatcher,
            index: CategoryIndex::default(),
            selection: SelectionState::default(),
            seeded: false,
        }
    }

    /// Rescan the process directory and bring the selection in line with it.
    ///
    /// The first refresh seeds the selection with the first discovered category.
    pub fn refresh(&mut self) -> &CategoryIndex {
        let processes = self.registry.discover();
        self.index = group_by_category(&processes);

        if self.seeded {
            self.selection.reconcile(&self.index);
        } else {
            self.selection = SelectionState::initial(&self.index);
            self.seeded = true;
        }
        &self.index
    }

    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    pub fn labels(&self) -> &Labels<'a> {
        &self.labels
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Labelled categories and processes from the latest refresh.
    pub fn options(&self) -> Vec<CategoryOption> {
        self.index.options(&self.labels)
    }

    pub fn select_category(&mut self, category: &str) -> SelectionOutcome {
        self.selection.select_category(&self.index, category)
    }

    pub fn select_process(&mut self, process_id: &str) -> SelectionOutcome {
        self.selection.select_process(&self.index, process_id)
    }

    pub fn directive(&self) -> RenderDirective {
        match self.selection.selected_process() {
            Some(process_id) => self.dispatcher.dispatch(process_id),
            None => RenderDirective::NoSelection,
        }
    }

    /// Render the currently selected process.
    pub fn render(&self, upload: Option<&Upload>, run: bool) -> ViewReport {
        match self.directive() {
            RenderDirective::Specialized { process_id, view } => {
                let Some(descriptor) = self.index.descriptor(&process_id) else {
                    return ViewReport::no_selection();
                };
                let ctx = ViewContext {
                    process_id: &process_id,
                    implementation: &descriptor.implementation,
                    labels: &self.labels,
                };
                render_view(view, &ctx, upload, run)
            }
            RenderDirective::NotImplemented { display_name, .. } => {
                ViewReport::not_implemented(&display_name)
            }
            RenderDirective::NoSelection => ViewReport::no_selection(),
        }
    }
}
