//! Scenario documents: the ordered list of steps an operator walks through.
//!
//! A scenario is a JSON object with a flat `steps` array:
//!
//! ```json
//! {
//!   "steps": [
//!     { "file": "/etc/app/app.conf", "key": "port", "type": "port",
//!       "comment": "Listening port", "default": "8080" },
//!     { "file": "/etc/app/log.ini", "key": "level", "type": "enum",
//!       "enumValues": ["debug", "info", "warn"] }
//!   ]
//! }
//! ```
//!
//! [`load_scenario`] only parses; [`Scenario::validate`] enforces the
//! structural rules (keys present, known types, non-empty enum sets) before
//! anything is prompted or written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfiguratorError;
use crate::types::ValueType;
use crate::validate::is_resolvable_path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One prompt: where the answer goes, and what it must look like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub file: PathBuf,
    pub key: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Read and parse a scenario file. Rejects a scenario with no steps.
pub fn load_scenario(path: &Path) -> Result<Scenario, ConfiguratorError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfiguratorError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let scenario: Scenario =
        serde_json::from_str(&content).map_err(|e| ConfiguratorError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    if scenario.steps.is_empty() {
        return Err(ConfiguratorError::EmptyScenario);
    }
    Ok(scenario)
}

impl Scenario {
    /// Check every step; the first violation is reported with its 1-based
    /// step number.
    pub fn validate(&self) -> Result<(), ConfiguratorError> {
        if self.steps.is_empty() {
            return Err(ConfiguratorError::EmptyScenario);
        }
        for (i, step) in self.steps.iter().enumerate() {
            step.validate().map_err(|reason| ConfiguratorError::InvalidStep {
                step: i + 1,
                reason,
            })?;
        }
        Ok(())
    }
}

impl Step {
    fn validate(&self) -> Result<(), String> {
        if self.file.as_os_str().is_empty() {
            return Err("file path is empty".into());
        }
        if self.key.is_empty() {
            return Err("key is empty".into());
        }
        if !self.value_type.is_known() {
            return Err(format!("type '{}' is not supported", self.value_type));
        }
        if self.value_type == ValueType::Enum && self.enum_values.is_empty() {
            return Err("enum type requires at least one allowed value".into());
        }
        let file = self.file.to_string_lossy();
        if !is_resolvable_path(&file) {
            return Err(format!("file path '{file}' is invalid"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{sample_workspace, step, write_file};
    use tempfile::TempDir;

    fn scenario(steps: Vec<Step>) -> Scenario {
        Scenario { steps }
    }

    #[test]
    fn loads_sample() {
        let (_dir, path) = sample_workspace();
        let sc = load_scenario(&path).unwrap();
        assert_eq!(sc.steps.len(), 3);
        assert_eq!(sc.steps[0].value_type, ValueType::Port);
        assert_eq!(sc.steps[0].comment.as_deref(), Some("Listening port"));
        assert_eq!(sc.steps[2].value_type, ValueType::Ip);
        assert!(sc.validate().is_ok());
    }

    #[test]
    fn missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let err = load_scenario(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfiguratorError::FileOpen { .. }));
    }

    #[test]
    fn malformed_json_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "s.json", "{\"steps\": [");
        let err = load_scenario(&path).unwrap_err();
        assert!(matches!(err, ConfiguratorError::Parse { .. }));
    }

    #[test]
    fn empty_steps_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "s.json", r#"{"steps": []}"#);
        assert!(matches!(
            load_scenario(&path),
            Err(ConfiguratorError::EmptyScenario)
        ));
    }

    #[test]
    fn unknown_type_survives_parse() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "s.json",
            r#"{"steps": [{"file": "a.conf", "key": "k", "type": "float"}]}"#,
        );
        let sc = load_scenario(&path).unwrap();
        let err = sc.validate().unwrap_err();
        assert_eq!(err.to_string(), "Step 1: type 'float' is not supported");
    }

    #[test]
    fn empty_key_rejected() {
        let sc = scenario(vec![
            step(Path::new("a.conf"), "ok", ValueType::String),
            step(Path::new("a.conf"), "", ValueType::String),
        ]);
        match sc.validate().unwrap_err() {
            ConfiguratorError::InvalidStep { step, reason } => {
                assert_eq!(step, 2);
                assert!(reason.contains("key"));
            }
            other => panic!("Expected InvalidStep, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_rejected() {
        let sc = scenario(vec![step(Path::new(""), "k", ValueType::Int)]);
        let err = sc.validate().unwrap_err();
        assert!(err.to_string().contains("file path is empty"));
    }

    #[test]
    fn enum_without_values_rejected() {
        let sc = scenario(vec![step(Path::new("a.ini"), "mode", ValueType::Enum)]);
        let err = sc.validate().unwrap_err();
        assert!(err.to_string().contains("at least one allowed value"));
    }

    #[test]
    fn enum_with_values_passes() {
        let mut s = step(Path::new("a.ini"), "mode", ValueType::Enum);
        s.enum_values = vec!["fast".into()];
        assert!(scenario(vec![s]).validate().is_ok());
    }

    #[test]
    fn enum_values_use_camel_case() {
        let s: Step = serde_json::from_str(
            r#"{"file": "a.ini", "key": "mode", "type": "enum", "enumValues": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(s.enum_values, vec!["a", "b"]);
        assert_eq!(s.default, None);
    }
}
