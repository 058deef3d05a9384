// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::NO_DESCRIPTION;
use crate::config::AppConfig;

/// Derived display label: `_` becomes a space and each word is capitalized.
///
/// A letter is upper-cased when the previous character is not a letter and
/// lower-cased otherwise, so `"quality_control_processor"` becomes
/// `"Quality Control Processor"` and `"abc1def"` becomes `"Abc1Def"`.
pub fn title_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut previous_is_letter = false;
    for ch in identifier.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }
    out
}

/// Label resolution against the dashboard configuration.
///
/// Never fails: anything the configuration does not mention falls back to a
/// derived label.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    config: &'a AppConfig,
}

impl<'a> Labels<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    pub fn category_name(&self, category: &str) -> String {
        self.config
            .category(category)
            .and_then(|c| c.name.clone())
            .unwrap_or_else(|| title_case(category))
    }

    pub fn process_name(&self, category: &str, process_id: &str) -> String {
        self.config
            .category(category)
            .and_then(|c| c.process_names.get(process_id).cloned())
            .unwrap_or_else(|| title_case(process_id))
    }

    pub fn process_description(&self, category: &str, process_id: &str) -> String {
        self.config
            .category(category)
            .and_then(|c| c.process_descriptions.get(process_id).cloned())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string())
    }

    /// Process name looked up across every configured category in file order,
    /// used when the process's category is not known.
    pub fn process_name_anywhere(&self, process_id: &str) -> String {
        self.config
            .categories
            .iter()
            .find_map(|(_, c)| c.process_names.get(process_id).cloned())
            .unwrap_or_else(|| title_case(process_id))
    }

    /// Name and description with explicit defaults, for views that know which
    /// category they belong to and carry their own fallback text.
    pub fn process_heading(
        &self,
        category: &str,
        process_id: &str,
        default_name: &str,
        default_description: &str,
    ) -> (String, String) {
        let category = self.config.category(category);
        let name = category
            .and_then(|c| c.process_names.get(process_id).cloned())
            .unwrap_or_else(|| default_name.to_string());
        let description = category
            .and_then(|c| c.process_descriptions.get(process_id).cloned())
            .unwrap_or_else(|| default_description.to_string());
        (name, description)
    }
}

/// A labelled category with its labelled processes, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOption {
    pub key: String,
    pub name: String,
    pub processes: Vec<ProcessOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOption {
    pub id: String,
    pub name: String,
    pub description: String,
}
