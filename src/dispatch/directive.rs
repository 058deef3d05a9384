// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::session::DirectiveResolved;
use crate::observability::messages::StructuredLog;
use crate::resolver::Labels;

/// Processes that have a dedicated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecializedView {
    RiskAnalysis,
    QualityControl,
}

impl SpecializedView {
    /// Configuration category the view reads its heading from.
    pub fn config_category(&self) -> &'static str {
        match self {
            SpecializedView::RiskAnalysis => "Production",
            SpecializedView::QualityControl => "quality_control",
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            SpecializedView::RiskAnalysis => "Risk Analysis",
            SpecializedView::QualityControl => "Quality Control Processor",
        }
    }

    pub fn default_description(&self) -> &'static str {
        match self {
            SpecializedView::RiskAnalysis => "Sample risk analysis process.",
            SpecializedView::QualityControl => "Sample quality control process.",
        }
    }
}

/// Which rendering path the front end should take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDirective {
    Specialized {
        process_id: String,
        view: SpecializedView,
    },
    /// No dedicated view; show a standard "not yet implemented" message.
    NotImplemented {
        process_id: String,
        display_name: String,
    },
    /// No consistent process is selected.
    NoSelection,
}

impl RenderDirective {
    fn label(&self) -> &'static str {
        match self {
            RenderDirective::Specialized { .. } => "specialized view",
            RenderDirective::NotImplemented { .. } => "not implemented",
            RenderDirective::NoSelection => "no selection",
        }
    }
}

/// Static name → view table. Entries are fixed at build time, not discovered.
#[derive(Debug, Clone)]
pub struct HandlerTable {
    entries: Vec<(&'static str, SpecializedView)>,
}

impl HandlerTable {
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                ("risk_analysis", SpecializedView::RiskAnalysis),
                ("quality_control_processor", SpecializedView::QualityControl),
            ],
        }
    }

    pub fn lookup(&self, process_id: &str) -> Option<SpecializedView> {
        self.entries
            .iter()
            .find(|(name, _)| *name == process_id)
            .map(|(_, view)| *view)
    }

    pub fn handler_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl Default for HandlerTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolves a process identifier to a [`RenderDirective`].
#[derive(Debug, Clone)]
pub struct Dispatcher<'a> {
    handlers: HandlerTable,
    labels: Labels<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(handlers: HandlerTable, labels: Labels<'a>) -> Self {
        Self { handlers, labels }
    }

    pub fn handlers(&self) -> &HandlerTable {
        &self.handlers
    }

    pub fn labels(&self) -> &Labels<'a> {
        &self.labels
    }

    pub fn dispatch(&self, process_id: &str) -> RenderDirective {
        let directive = match self.handlers.lookup(process_id) {
            Some(view) => RenderDirective::Specialized {
                process_id: process_id.to_string(),
                view,
            },
            None => RenderDirective::NotImplemented {
                process_id: process_id.to_string(),
                display_name: self.labels.process_name_anywhere(process_id),
            },
        };

        DirectiveResolved {
            process_id,
            directive: directive.label(),
        }
        .log();
        directive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_dispatch_specialized_handlers() {
        let config = AppConfig::default();
        let dispatcher = Dispatcher::new(HandlerTable::builtin(), Labels::new(&config));

        assert_eq!(
            dispatcher.dispatch("risk_analysis"),
            RenderDirective::Specialized {
                process_id: "risk_analysis".to_string(),
                view: SpecializedView::RiskAnalysis,
            }
        );
        assert_eq!(
            dispatcher.dispatch("quality_control_processor"),
            RenderDirective::Specialized {
                process_id: "quality_control_processor".to_string(),
                view: SpecializedView::QualityControl,
            }
        );
    }

    #[test]
    fn test_dispatch_generic_fallback_has_display_name() {
        let config = AppConfig::default();
        let dispatcher = Dispatcher::new(HandlerTable::builtin(), Labels::new(&config));

        match dispatcher.dispatch("anything_else") {
            RenderDirective::NotImplemented {
                process_id,
                display_name,
            } => {
                assert_eq!(process_id, "anything_else");
                assert_eq!(display_name, "Anything Else");
            }
            other => panic!("expected NotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_generic_uses_configured_name() {
        let config = AppConfig::from_yaml_str(
            "categories:\n  Production:\n    process_names:\n      data_profile: Column Profile\n",
        )
        .unwrap();
        let dispatcher = Dispatcher::new(HandlerTable::builtin(), Labels::new(&config));

        assert_eq!(
            dispatcher.dispatch("data_profile"),
            RenderDirective::NotImplemented {
                process_id: "data_profile".to_string(),
                display_name: "Column Profile".to_string(),
            }
        );
    }

    #[test]
    fn test_handler_table_is_static() {
        let table = HandlerTable::builtin();
        assert_eq!(
            table.handler_names().collect::<Vec<_>>(),
            vec!["risk_analysis", "quality_control_processor"]
        );
        assert!(table.lookup("data_profile").is_none());
    }
}
