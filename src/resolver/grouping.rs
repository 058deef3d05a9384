// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::panic::{catch_unwind, AssertUnwindSafe};

use super::labels::{CategoryOption, Labels, ProcessOption};
use crate::backends::local::ProcessImplementation;
use crate::config::consts::UNCATEGORIZED;
use crate::dispatch::panic_message;
use crate::observability::messages::process::CategoryProbeFailed;
use crate::observability::messages::StructuredLog;
use crate::registry::ProcessMap;

/// One discovered process with its resolved category.
///
/// Built fresh from every scan and never cached.
#[derive(Debug, Clone)]
pub struct ProcessDescriptor {
    pub identifier: String,
    pub category: String,
    pub implementation: ProcessImplementation,
}

/// Processes sharing a category, in scan order.
#[derive(Debug, Clone)]
pub struct CategoryBucket {
    pub key: String,
    pub processes: Vec<ProcessDescriptor>,
}

impl CategoryBucket {
    pub fn contains(&self, process_id: &str) -> bool {
        self.processes.iter().any(|p| p.identifier == process_id)
    }
}

/// Discovered processes grouped by category, buckets in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    buckets: Vec<CategoryBucket>,
}

impl CategoryIndex {
    pub fn buckets(&self) -> &[CategoryBucket] {
        &self.buckets
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn category_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.iter().map(|b| b.key.as_str())
    }

    pub fn first_category(&self) -> Option<&str> {
        self.buckets.first().map(|b| b.key.as_str())
    }

    pub fn bucket(&self, category: &str) -> Option<&CategoryBucket> {
        self.buckets.iter().find(|b| b.key == category)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.bucket(category).is_some()
    }

    pub fn contains_process(&self, category: &str, process_id: &str) -> bool {
        self.bucket(category)
            .map(|b| b.contains(process_id))
            .unwrap_or(false)
    }

    pub fn descriptor(&self, process_id: &str) -> Option<&ProcessDescriptor> {
        self.buckets
            .iter()
            .flat_map(|b| b.processes.iter())
            .find(|p| p.identifier == process_id)
    }

    /// Labelled categories and processes for display.
    pub fn options(&self, labels: &Labels<'_>) -> Vec<CategoryOption> {
        self.buckets
            .iter()
            .map(|bucket| CategoryOption {
                key: bucket.key.clone(),
                name: labels.category_name(&bucket.key),
                processes: bucket
                    .processes
                    .iter()
                    .map(|p| ProcessOption {
                        id: p.identifier.clone(),
                        name: labels.process_name(&bucket.key, &p.identifier),
                        description: labels.process_description(&bucket.key, &p.identifier),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Category of a process: the type-level declaration, else the category of a
/// transient instance, else [`UNCATEGORIZED`].
///
/// A constructor failure or a panic while probing the instance counts as
/// uncategorized.
pub fn resolve_category(process_id: &str, implementation: &ProcessImplementation) -> String {
    if let Some(category) = implementation.category.filter(|c| !c.is_empty()) {
        return category.to_string();
    }

    let probe = catch_unwind(AssertUnwindSafe(|| {
        implementation
            .instantiate()
            .map(|instance| instance.category())
            .map_err(|e| e.to_string())
    }))
    .unwrap_or_else(|payload| Err(format!("panicked: {}", panic_message(payload.as_ref()))));

    match probe {
        Ok(category) => category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string()),
        Err(reason) => {
            CategoryProbeFailed {
                process_id,
                fallback: UNCATEGORIZED,
                reason: &reason,
            }
            .log();
            UNCATEGORIZED.to_string()
        }
    }
}

/// Group a scan result by category.
pub fn group_by_category(processes: &ProcessMap) -> CategoryIndex {
    let mut buckets: Vec<CategoryBucket> = Vec::new();

    for (identifier, implementation) in processes.iter() {
        let category = resolve_category(identifier, implementation);
        let descriptor = ProcessDescriptor {
            identifier: identifier.to_string(),
            category: category.clone(),
            implementation: *implementation,
        };

        match buckets.iter_mut().find(|b| b.key == category) {
            Some(bucket) => bucket.processes.push(descriptor),
            None => buckets.push(CategoryBucket {
                key: category,
                processes: vec![descriptor],
            }),
        }
    }

    CategoryIndex { buckets }
}
