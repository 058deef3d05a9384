// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::ConfigError;

/// Display configuration for the dashboard.
///
/// Maps raw category keys to human-readable names, process display names and
/// process descriptions. Loaded once at startup and read-only afterwards;
/// components borrow it rather than holding their own copy.
///
/// # Example
/// ```yaml
/// categories:
///   quality_control:
///     name: "Quality Control"
///     process_names:
///       quality_control_processor: "Missing Value Check"
///     process_descriptions:
///       quality_control_processor: "Counts missing values per column."
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Categories in file order.
    #[serde(default, deserialize_with = "ordered_categories")]
    pub categories: Vec<(String, CategoryConfig)>,
}

/// Configuration for a single category. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CategoryConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub process_names: HashMap<String, String>,
    #[serde(default)]
    pub process_descriptions: HashMap<String, String>,
}

impl AppConfig {
    pub fn category(&self, key: &str) -> Option<&CategoryConfig> {
        self.categories
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, category)| category)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document parses as unit; treat it like an empty config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// `categories` as an ordered list. A null category entry is an empty one.
fn ordered_categories<'de, D>(deserializer: D) -> Result<Vec<(String, CategoryConfig)>, D::Error>
where
    D: Deserializer<'de>,
{
    let mapping = Option::<serde_yaml::Mapping>::deserialize(deserializer)?.unwrap_or_default();

    mapping
        .into_iter()
        .map(|(key, value)| {
            let key = key
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| D::Error::custom(format!("category key {:?} is not a string", key)))?;
            let category = if value.is_null() {
                CategoryConfig::default()
            } else {
                serde_yaml::from_value(value).map_err(D::Error::custom)?
            };
            Ok((key, category))
        })
        .collect()
}

/// Load the configuration from a YAML file.
///
/// A missing file yields an empty configuration. A file that exists but
/// cannot be read or parsed is an error.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "Config file not found, using empty configuration");
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = AppConfig::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        categories = config.categories.len(),
        "Loaded dashboard configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
categories:
  quality_control:
    name: "Quality Control"
    process_names:
      quality_control_processor: "Missing Value Check"
    process_descriptions:
      quality_control_processor: "Counts missing values."
  Production: {}
"#;
        let cfg = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.categories.len(), 2);

        let qc = cfg.category("quality_control").unwrap();
        assert_eq!(qc.name.as_deref(), Some("Quality Control"));
        assert_eq!(
            qc.process_names.get("quality_control_processor").map(String::as_str),
            Some("Missing Value Check")
        );

        let production = cfg.category("Production").unwrap();
        assert!(production.name.is_none());
        assert!(production.process_names.is_empty());
    }

    #[test]
    fn categories_keep_file_order() {
        let cfg = AppConfig::from_yaml_str("categories:\n  zeta: {}\n  alpha:\n  mid: {}\n").unwrap();
        let keys: Vec<&str> = cfg.categories.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(cfg.category("alpha"), Some(&CategoryConfig::default()));
    }

    #[test]
    fn missing_categories_key_is_empty() {
        let cfg = AppConfig::from_yaml_str("other: 1\n").unwrap();
        assert!(cfg.categories.is_empty());
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn missing_file_yields_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(dir.path().join("absent.yaml")).unwrap();
        assert!(cfg.categories.is_empty());
    }

    #[test]
    fn load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "categories:\n  reporting:\n    name: Reports").unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(
            cfg.category("reporting").and_then(|c| c.name.as_deref()),
            Some("Reports")
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "categories: [unclosed").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
