// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use crate::backends::local::ProcessImplementation;
use crate::errors::InvocationError;
use crate::observability::messages::process::{
    InvocationCompleted, InvocationFailed, InvocationStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{ProcessInputs, ProcessResult};

/// Build a fresh instance of `implementation` and run it on `inputs`.
///
/// Error results from the process come back as `Ok(ProcessResult::Error)`.
/// A constructor failure, or a panic in the constructor or `process_data`, is caught here and
/// returned as an [`InvocationError`], leaving the caller's session usable.
pub fn invoke(
    process_id: &str,
    implementation: &ProcessImplementation,
    inputs: &ProcessInputs,
) -> Result<ProcessResult, InvocationError> {
    let started = InvocationStarted {
        process_id,
        input_keys: inputs.len(),
    };
    let _span = started.span("invoke").entered();
    started.log();

    let start = Instant::now();
    let panicked = |payload: Box<dyn Any + Send>| InvocationError::Panicked {
        process_id: process_id.to_string(),
        message: panic_message(payload.as_ref()),
    };
    let outcome = catch_unwind(AssertUnwindSafe(|| implementation.instantiate()))
        .map_err(panicked)
        .and_then(|built| built.map_err(InvocationError::from))
        .and_then(|instance| {
            catch_unwind(AssertUnwindSafe(|| instance.process_data(inputs))).map_err(panicked)
        });

    match &outcome {
        Ok(result) => InvocationCompleted {
            process_id,
            is_error: result.is_error(),
            duration: start.elapsed(),
        }
        .log(),
        Err(e) => InvocationFailed {
            process_id,
            error: e,
        }
        .log(),
    }

    outcome
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::ProcessCatalog;
    use crate::data::{Cell, Table};
    use crate::errors::ProcessError;
    use crate::traits::Process;
    use serde_json::json;

    struct Exploding;

    impl Process for Exploding {
        fn name(&self) -> &'static str {
            "exploding"
        }

        fn process_data(&self, _inputs: &ProcessInputs) -> ProcessResult {
            panic!("column index out of range")
        }
    }

    #[test]
    fn test_invoke_returns_outputs() {
        let catalog = ProcessCatalog::builtin();
        let table = Table::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![Cell::Int(1), Cell::Null], vec![Cell::Int(2), Cell::Int(2)]],
        );

        let result = invoke(
            "quality_control_processor",
            catalog.get("quality_control").unwrap(),
            &ProcessInputs::with_data(table),
        )
        .unwrap();

        assert_eq!(result.output("missing_values"), Some(&json!({"A": 0, "B": 1})));
    }

    #[test]
    fn test_invoke_passes_error_results_through() {
        let catalog = ProcessCatalog::builtin();
        let result = invoke(
            "quality_control_processor",
            catalog.get("quality_control").unwrap(),
            &ProcessInputs::new(),
        )
        .unwrap();
        assert_eq!(result, ProcessResult::error("No data provided"));
    }

    #[test]
    fn test_invoke_catches_panics() {
        let implementation = ProcessImplementation::new("exploding", None, || Ok(Box::new(Exploding)));
        let err = invoke("exploding", &implementation, &ProcessInputs::new()).unwrap_err();
        assert_eq!(
            err,
            InvocationError::Panicked {
                process_id: "exploding".to_string(),
                message: "column index out of range".to_string(),
            }
        );
    }

    #[test]
    fn test_invoke_catches_constructor_panics() {
        let implementation =
            ProcessImplementation::new("fragile", None, || panic!("constructor exploded"));
        let err = invoke("fragile", &implementation, &ProcessInputs::new()).unwrap_err();
        assert_eq!(
            err,
            InvocationError::Panicked {
                process_id: "fragile".to_string(),
                message: "constructor exploded".to_string(),
            }
        );
    }

    #[test]
    fn test_invoke_reports_construction_failure() {
        let implementation = ProcessImplementation::new("broken", None, || {
            Err(ProcessError::Construction {
                kind: "broken".to_string(),
                reason: "no model".to_string(),
            })
        });
        let err = invoke("broken", &implementation, &ProcessInputs::new()).unwrap_err();
        assert!(matches!(err, InvocationError::Construction(_)));
    }
}
