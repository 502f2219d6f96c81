//! Clap adapter for the configurator.
//!
//! Compiled only when the `clap` Cargo feature is enabled (on by default).
//! The only bridge to the core is [`Cli::into_action()`], which converts
//! clap-parsed arguments into an [`Action`](crate::Action). Everything after
//! that flows through the clap-free [`handle`](crate::handle) API.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::{Action, ValueType};

/// Walk through a scenario of configuration prompts and persist the answers.
#[derive(Debug, Parser)]
#[command(name = "configurator", version)]
pub struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for every step of a scenario and save the answers.
    Run {
        /// Scenario file (default: the `scenario` setting).
        scenario: Option<PathBuf>,
    },
    /// Load and validate a scenario without prompting.
    Check {
        /// Scenario file (default: the `scenario` setting).
        scenario: Option<PathBuf>,
    },
    /// Validate and save a single value.
    Set {
        /// Target file; format is inferred from the extension.
        file: PathBuf,
        /// Key name; dotted paths address nested objects in JSON files.
        key: String,
        /// Value to save.
        value: String,
        /// Declared type (string, int, bool, ip, port, path, enum, any).
        #[arg(long = "type", default_value = "string")]
        value_type: String,
        /// Allowed value for `--type enum`. Repeat for each value.
        #[arg(long = "enum-value")]
        enum_values: Vec<String>,
    },
    /// Print a commented settings template.
    Settings,
}

impl Cli {
    /// Convert clap-parsed args into a framework-agnostic `Action`.
    ///
    /// A bare invocation (no subcommand) maps to `Action::Run` with the
    /// scenario from settings.
    pub fn into_action(self) -> Action {
        match self.command {
            None => Action::Run { scenario: None },
            Some(Command::Run { scenario }) => Action::Run { scenario },
            Some(Command::Check { scenario }) => Action::Check { scenario },
            Some(Command::Set {
                file,
                key,
                value,
                value_type,
                enum_values,
            }) => Action::Set {
                file,
                key,
                value,
                value_type: ValueType::from(value_type),
                enum_values,
            },
            Some(Command::Settings) => Action::Settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn bare_invocation_runs_default_scenario() {
        let action = parse(&["configurator"]).into_action();
        assert_eq!(action, Action::Run { scenario: None });
    }

    #[test]
    fn run_with_scenario() {
        let action = parse(&["configurator", "run", "setup.json"]).into_action();
        assert_eq!(
            action,
            Action::Run {
                scenario: Some(PathBuf::from("setup.json"))
            }
        );
    }

    #[test]
    fn check_without_scenario() {
        let action = parse(&["configurator", "check"]).into_action();
        assert_eq!(action, Action::Check { scenario: None });
    }

    #[test]
    fn set_defaults_to_string_type() {
        let action = parse(&["configurator", "set", "app.conf", "name", "demo"]).into_action();
        assert_eq!(
            action,
            Action::Set {
                file: PathBuf::from("app.conf"),
                key: "name".into(),
                value: "demo".into(),
                value_type: ValueType::String,
                enum_values: vec![],
            }
        );
    }

    #[test]
    fn set_enum_with_values() {
        let action = parse(&[
            "configurator",
            "set",
            "log.ini",
            "level",
            "info",
            "--type",
            "enum",
            "--enum-value",
            "debug",
            "--enum-value",
            "info",
        ])
        .into_action();
        match action {
            Action::Set {
                value_type,
                enum_values,
                ..
            } => {
                assert_eq!(value_type, ValueType::Enum);
                assert_eq!(enum_values, vec!["debug", "info"]);
            }
            other => panic!("Expected Set, got {other:?}"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = parse(&["configurator", "check", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn set_requires_value() {
        assert!(Cli::try_parse_from(["configurator", "set", "app.conf", "name"]).is_err());
    }
}
