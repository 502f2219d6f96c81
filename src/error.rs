use std::path::PathBuf;
use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum ConfiguratorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Top-level JSON value in {path} is not an object")]
    NotAnObject { path: PathBuf },

    #[error("Cannot set '{key}' in {path}: '{segment}' exists and is not an object")]
    StructuralConflict {
        path: PathBuf,
        key: String,
        segment: String,
    },

    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario contains no steps")]
    EmptyScenario,

    #[error("Step {step}: {reason}")]
    InvalidStep { step: usize, reason: String },

    #[error("Settings error: {0}")]
    Settings(#[from] confique::Error),

    #[error("Input closed before the scenario was finished")]
    InputClosed,

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_conflict_formats_correctly() {
        let err = ConfiguratorError::StructuralConflict {
            path: "/etc/app/config.json".into(),
            key: "server.port.value".into(),
            segment: "port".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("server.port.value"));
        assert!(msg.contains("config.json"));
        assert!(msg.contains("'port'"));
    }

    #[test]
    fn invalid_step_formats() {
        let err = ConfiguratorError::InvalidStep {
            step: 3,
            reason: "key is empty".into(),
        };
        assert_eq!(err.to_string(), "Step 3: key is empty");
    }

    #[test]
    fn validation_is_transparent() {
        let err: ConfiguratorError = ValidationError::InvalidIp("nope".into()).into();
        assert_eq!(err.to_string(), "invalid IP address: nope");
    }
}
