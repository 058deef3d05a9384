// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::CategoryIndex;
use crate::observability::messages::session::SelectionCleared;
use crate::observability::messages::StructuredLog;

/// What a selection change left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected,
    /// Nothing consistent is selected; the front end should ask the user to
    /// choose again.
    NoSelection,
}

/// The current category/process selection of one session.
///
/// Invariants: `selected_process` is only set while `selected_category` is
/// set, and it names a process inside that category's bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_category: Option<String>,
    selected_process: Option<String>,
}

impl SelectionState {
    /// Starting state for a new session: the first discovered category, no process.
    pub fn initial(index: &CategoryIndex) -> Self {
        Self {
            selected_category: index.first_category().map(str::to_string),
            selected_process: None,
        }
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn selected_process(&self) -> Option<&str> {
        self.selected_process.as_deref()
    }

    /// Select a category. Any previously selected process is cleared; an
    /// unknown category clears the whole selection.
    pub fn select_category(&mut self, index: &CategoryIndex, category: &str) -> SelectionOutcome {
        if !index.contains_category(category) {
            SelectionCleared {
                field: "category",
                value: category,
                reason: "not a discovered category",
            }
            .log();
            self.clear_category();
            return SelectionOutcome::NoSelection;
        }

        self.selected_category = Some(category.to_string());
        self.selected_process = None;
        SelectionOutcome::Selected
    }

    /// Select a process inside the current category.
    ///
    /// A process outside the selected category's bucket (or with no category
    /// selected) clears the process selection.
    pub fn select_process(&mut self, index: &CategoryIndex, process_id: &str) -> SelectionOutcome {
        let in_category = self
            .selected_category
            .as_deref()
            .map(|category| index.contains_process(category, process_id))
            .unwrap_or(false);

        if !in_category {
            let reason = match self.selected_category.as_deref() {
                Some(category) => format!("not in category '{}'", category),
                None => "no category selected".to_string(),
            };
            SelectionCleared {
                field: "process",
                value: process_id,
                reason: &reason,
            }
            .log();
            self.selected_process = None;
            return SelectionOutcome::NoSelection;
        }

        self.selected_process = Some(process_id.to_string());
        SelectionOutcome::Selected
    }

    pub fn clear_category(&mut self) {
        self.selected_category = None;
        self.selected_process = None;
    }

    /// Re-validate against a fresh scan, dropping whatever no longer exists.
    pub fn reconcile(&mut self, index: &CategoryIndex) -> SelectionOutcome {
        if let Some(category) = self.selected_category.clone() {
            if !index.contains_category(&category) {
                SelectionCleared {
                    field: "category",
                    value: &category,
                    reason: "no longer discovered",
                }
                .log();
                self.clear_category();
                return SelectionOutcome::NoSelection;
            }

            if let Some(process) = self.selected_process.clone() {
                if !index.contains_process(&category, &process) {
                    SelectionCleared {
                        field: "process",
                        value: &process,
                        reason: "no longer discovered",
                    }
                    .log();
                    self.selected_process = None;
                }
            }
        }

        match self.selected_process {
            Some(_) => SelectionOutcome::Selected,
            None => SelectionOutcome::NoSelection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::ProcessCatalog;
    use crate::registry::ProcessMap;
    use crate::resolver::group_by_category;

    fn index() -> CategoryIndex {
        let catalog = ProcessCatalog::builtin();
        let processes: ProcessMap = [
            ("quality_control_processor", "quality_control"),
            ("risk_analysis", "risk_analysis"),
            ("data_profile", "data_profile"),
        ]
        .into_iter()
        .map(|(id, kind)| (id.to_string(), *catalog.get(kind).unwrap()))
        .collect();
        group_by_category(&processes)
    }

    #[test]
    fn test_initial_selects_first_category() {
        let index = index();
        let state = SelectionState::initial(&index);
        assert_eq!(state.selected_category(), index.first_category());
        assert!(state.selected_process().is_none());

        let empty = SelectionState::initial(&CategoryIndex::default());
        assert_eq!(empty, SelectionState::default());
    }

    #[test]
    fn test_select_category_clears_process() {
        let index = index();
        let mut state = SelectionState::default();
        assert_eq!(state.select_category(&index, "Production"), SelectionOutcome::Selected);
        assert_eq!(state.select_process(&index, "risk_analysis"), SelectionOutcome::Selected);

        assert_eq!(state.select_category(&index, "quality_control"), SelectionOutcome::Selected);
        assert_eq!(state.selected_category(), Some("quality_control"));
        assert!(state.selected_process().is_none());
    }

    #[test]
    fn test_unknown_category_clears_everything() {
        let index = index();
        let mut state = SelectionState::default();
        state.select_category(&index, "Production");
        state.select_process(&index, "data_profile");

        assert_eq!(state.select_category(&index, "nope"), SelectionOutcome::NoSelection);
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn test_process_outside_category_is_cleared_idempotently() {
        let index = index();
        let mut state = SelectionState::default();
        state.select_category(&index, "quality_control");
        state.select_process(&index, "quality_control_processor");

        assert_eq!(state.select_process(&index, "risk_analysis"), SelectionOutcome::NoSelection);
        let cleared = state.clone();
        assert_eq!(cleared.selected_category(), Some("quality_control"));
        assert!(cleared.selected_process().is_none());

        assert_eq!(state.select_process(&index, "risk_analysis"), SelectionOutcome::NoSelection);
        assert_eq!(state, cleared);
    }

    #[test]
    fn test_process_without_category_is_rejected() {
        let index = index();
        let mut state = SelectionState::default();
        assert_eq!(
            state.select_process(&index, "quality_control_processor"),
            SelectionOutcome::NoSelection
        );
        assert!(state.selected_process().is_none());
    }

    #[test]
    fn test_clear_category_clears_process() {
        let index = index();
        let mut state = SelectionState::default();
        state.select_category(&index, "Production");
        state.select_process(&index, "risk_analysis");
        state.clear_category();
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn test_reconcile_drops_stale_selection() {
        let index = index();
        let mut state = SelectionState::default();
        state.select_category(&index, "Production");
        state.select_process(&index, "risk_analysis");
        assert_eq!(state.reconcile(&index), SelectionOutcome::Selected);

        // Scan where risk_analysis disappeared but the category survives
        let catalog = ProcessCatalog::builtin();
        let smaller: ProcessMap = [("data_profile".to_string(), *catalog.get("data_profile").unwrap())]
            .into_iter()
            .collect();
        let smaller = group_by_category(&smaller);
        assert_eq!(state.reconcile(&smaller), SelectionOutcome::NoSelection);
        assert_eq!(state.selected_category(), Some("Production"));
        assert!(state.selected_process().is_none());

        // Scan where the category is gone entirely
        assert_eq!(state.reconcile(&CategoryIndex::default()), SelectionOutcome::NoSelection);
        assert_eq!(state, SelectionState::default());
    }
}
