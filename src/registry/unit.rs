// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::errors::UnitLoadError;

/// Contents of one process unit file.
///
/// # Example
/// ```yaml
/// # processes/quality_control_processor.yaml
/// implementations:
///   - quality_control
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UnitManifest {
    pub implementations: Vec<String>,
}

impl UnitManifest {
    pub fn load(path: &Path) -> Result<Self, UnitLoadError> {
        let content = fs::read_to_string(path).map_err(|source| UnitLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| UnitLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_manifest() {
        let manifest: UnitManifest =
            serde_yaml::from_str("implementations:\n  - quality_control\n  - data_profile\n")
                .unwrap();
        assert_eq!(manifest.implementations, vec!["quality_control", "data_profile"]);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "implementations: [unterminated").unwrap();
        let err = UnitManifest::load(file.path()).unwrap_err();
        assert!(matches!(err, UnitLoadError::Parse { .. }));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = UnitManifest::load(&dir.path().join("gone.yaml")).unwrap_err();
        assert!(matches!(err, UnitLoadError::Read { .. }));
    }
}
