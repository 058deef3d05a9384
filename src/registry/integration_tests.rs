// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use serde_json::json;

use crate::config::load_config;
use crate::config::AppConfig;
use crate::data::Upload;
use crate::dispatch::{Dispatcher, HandlerTable, RenderDirective, SpecializedView};
use crate::registry::ProcessRegistry;
use crate::resolver::{group_by_category, Labels};
use crate::session::Session;

/// Integration tests against the shipped configuration and process units
#[cfg(test)]
mod tests {
    use super::*;

    fn shipped(path: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(path)
    }

    fn shipped_config() -> AppConfig {
        load_config(shipped("configs/app_config.yaml")).expect("shipped config must parse")
    }

    fn shipped_registry() -> ProcessRegistry {
        ProcessRegistry::with_builtin_catalog(shipped("processes"))
    }

    #[test]
    fn test_shipped_units_are_discovered_without_template() {
        let processes = shipped_registry().discover();

        let ids: Vec<&str> = processes.identifiers().collect();
        assert_eq!(ids, vec!["data_profile", "quality_control_processor", "risk_analysis"]);
        assert!(!processes.contains_key("process_template"));
    }

    #[test]
    fn test_shipped_units_group_into_configured_categories() {
        let processes = shipped_registry().discover();
        let index = group_by_category(&processes);

        let keys: Vec<&str> = index.category_keys().collect();
        assert_eq!(keys, vec!["Production", "quality_control"]);
        assert!(index.contains_process("Production", "risk_analysis"));
        assert!(index.contains_process("Production", "data_profile"));
        assert!(index.contains_process("quality_control", "quality_control_processor"));
    }

    #[test]
    fn test_shipped_config_labels_every_discovered_process() {
        let config = shipped_config();
        let labels = Labels::new(&config);
        let index = group_by_category(&shipped_registry().discover());

        let options = index.options(&labels);
        let qc = options
            .iter()
            .find(|c| c.key == "quality_control")
            .expect("quality_control category");
        assert_eq!(qc.name, "Quality Control");
        assert_eq!(qc.processes[0].name, "Quality Control Processor");

        for category in &options {
            for process in &category.processes {
                assert_ne!(process.description, "No description available");
            }
        }
    }

    #[test]
    fn test_shipped_processes_dispatch() {
        let config = shipped_config();
        let dispatcher = Dispatcher::new(HandlerTable::builtin(), Labels::new(&config));

        assert_eq!(
            dispatcher.dispatch("quality_control_processor"),
            RenderDirective::Specialized {
                process_id: "quality_control_processor".to_string(),
                view: SpecializedView::QualityControl,
            }
        );
        assert_eq!(
            dispatcher.dispatch("risk_analysis"),
            RenderDirective::Specialized {
                process_id: "risk_analysis".to_string(),
                view: SpecializedView::RiskAnalysis,
            }
        );
        assert_eq!(
            dispatcher.dispatch("data_profile"),
            RenderDirective::NotImplemented {
                process_id: "data_profile".to_string(),
                display_name: "Data Profile".to_string(),
            }
        );
    }

    #[test]
    fn test_quality_control_end_to_end() {
        let config = shipped_config();
        let mut session = Session::new(&config, shipped_registry());
        session.refresh();

        session.select_category("quality_control");
        session.select_process("quality_control_processor");

        let upload = Upload::new("sample.csv", b"A,B\n1,\n2,3\n".to_vec());
        let report = session.render(Some(&upload), true);

        assert_eq!(report.title, "Quality Control Processor");
        assert!(!report.has_errors());
        let result = report.result.expect("process should have run");
        assert_eq!(result.output("missing_values"), Some(&json!({"A": 0, "B": 1})));
    }
}
