// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use super::processors::*;
use crate::errors::ProcessError;
use crate::traits::Process;

/// Builds a fresh process instance.
pub type ProcessConstructor = fn() -> Result<Box<dyn Process>, ProcessError>;

/// A constructible process implementation known to the catalog.
///
/// `category` is the type-level category. When it is `None`, the resolver
/// builds a transient instance and asks [`Process::category`] instead.
#[derive(Clone, Copy)]
pub struct ProcessImplementation {
    pub kind: &'static str,
    pub category: Option<&'static str>,
    constructor: ProcessConstructor,
}

impl ProcessImplementation {
    pub const fn new(
        kind: &'static str,
        category: Option<&'static str>,
        constructor: ProcessConstructor,
    ) -> Self {
        Self {
            kind,
            category,
            constructor,
        }
    }

    pub fn instantiate(&self) -> Result<Box<dyn Process>, ProcessError> {
        (self.constructor)()
    }
}

impl fmt::Debug for ProcessImplementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessImplementation")
            .field("kind", &self.kind)
            .field("category", &self.category)
            .finish()
    }
}

/// Build-time registry of process implementations compiled into the binary.
///
/// Unit manifests in the process directory name implementation kinds; only
/// kinds registered here satisfy the process contract.
///
/// - "quality_control" -> QualityControlProcessor
/// - "risk_analysis" -> RiskAnalysisProcessor
/// - "data_profile" -> DataProfileProcessor (instance-level category)
#[derive(Debug, Clone, Default)]
pub struct ProcessCatalog {
    entries: Vec<ProcessImplementation>,
}

impl ProcessCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in implementation registered.
    pub fn builtin() -> Self {
        Self::new()
            .with(ProcessImplementation::new(
                QualityControlProcessor::KIND,
                Some(QualityControlProcessor::CATEGORY),
                || Ok(Box::new(QualityControlProcessor::new())),
            ))
            .with(ProcessImplementation::new(
                RiskAnalysisProcessor::KIND,
                Some(RiskAnalysisProcessor::CATEGORY),
                || Ok(Box::new(RiskAnalysisProcessor::new())),
            ))
            .with(ProcessImplementation::new(
                DataProfileProcessor::KIND,
                None,
                || Ok(Box::new(DataProfileProcessor::new())),
            ))
    }

    /// Register an implementation. A kind that is already registered is replaced.
    pub fn register(&mut self, implementation: ProcessImplementation) {
        match self.entries.iter_mut().find(|e| e.kind == implementation.kind) {
            Some(existing) => *existing = implementation,
            None => self.entries.push(implementation),
        }
    }

    pub fn with(mut self, implementation: ProcessImplementation) -> Self {
        self.register(implementation);
        self
    }

    pub fn get(&self, kind: &str) -> Option<&ProcessImplementation> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// List all registered implementation kinds, in registration order
    pub fn list_available_implementations(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.kind).collect()
    }

    pub fn is_implementation_available(&self, kind: &str) -> bool {
        self.get(kind).is_some()
    }
}
