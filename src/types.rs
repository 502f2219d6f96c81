use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The declared kind of value a step accepts.
///
/// Scenario documents spell these as lowercase strings. A string that names
/// none of the known kinds deserializes to [`ValueType::Unknown`] so that a
/// bad scenario is reported by validation instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueType {
    String,
    Int,
    Bool,
    /// IPv4 or IPv6 literal. Spelled `ip` (or `ip-address`).
    Ip,
    /// TCP/UDP port, 1 through 65535.
    Port,
    Path,
    /// One of the step's `enumValues`.
    Enum,
    Any,
    Unknown(String),
}

impl ValueType {
    /// Whether this is one of the supported kinds.
    pub fn is_known(&self) -> bool {
        !matches!(self, ValueType::Unknown(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Bool => "bool",
            ValueType::Ip => "ip",
            ValueType::Port => "port",
            ValueType::Path => "path",
            ValueType::Enum => "enum",
            ValueType::Any => "any",
            ValueType::Unknown(s) => s,
        }
    }
}

impl From<&str> for ValueType {
    fn from(s: &str) -> Self {
        match s {
            "string" => ValueType::String,
            "int" => ValueType::Int,
            "bool" => ValueType::Bool,
            "ip" | "ip-address" => ValueType::Ip,
            "port" => ValueType::Port,
            "path" => ValueType::Path,
            "enum" => ValueType::Enum,
            "any" => ValueType::Any,
            other => ValueType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ValueType {
    fn from(s: String) -> Self {
        ValueType::from(s.as_str())
    }
}

impl From<ValueType> for String {
    fn from(t: ValueType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configurator operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Walk the operator through every step of a scenario.
    Run { scenario: Option<PathBuf> },
    /// Load and validate a scenario without prompting.
    Check { scenario: Option<PathBuf> },
    /// Validate and persist a single value without prompting.
    Set {
        file: PathBuf,
        key: String,
        value: String,
        value_type: ValueType,
        enum_values: Vec<String>,
    },
    /// Print the commented settings template.
    Settings,
}
