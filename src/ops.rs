//! Configurator operations and their result type.
//!
//! [`handle`] executes an [`Action`] and returns an [`Outcome`] for the caller
//! to display. Interactive actions read from and write to the streams passed
//! in, so the same code path serves the binary and the tests.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ConfiguratorError;
use crate::format::Format;
use crate::persist::save_value;
use crate::prompt::{Answer, Prompter};
use crate::scenario::load_scenario;
use crate::settings::{Settings, settings_template};
use crate::types::Action;
use crate::validate::validate_value;

/// Result of an operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An interactive run finished; holds the saved answers in order.
    Completed { answers: Vec<Answer> },
    /// A scenario loaded and passed validation.
    Checked { path: PathBuf, steps: usize },
    /// A single value was persisted.
    ValueSet {
        file: PathBuf,
        key: String,
        value: String,
        format: Format,
    },
    /// The commented settings template.
    Template(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Completed { answers } => {
                write!(f, "Saved {} value(s)", answers.len())
            }
            Outcome::Checked { path, steps } => {
                write!(f, "Scenario {} is valid ({steps} steps)", path.display())
            }
            Outcome::ValueSet {
                file,
                key,
                value,
                format,
            } => {
                let kind = match format {
                    Format::Plain => "plain",
                    Format::Ini => "ini",
                    Format::Json => "json",
                };
                write!(f, "Set {key} = {value} in {} ({kind})", file.display())
            }
            Outcome::Template(t) => write!(f, "{t}"),
        }
    }
}

/// Execute `action`. `input` and `output` are only used by [`Action::Run`].
pub fn handle<R: BufRead, W: Write>(
    action: &Action,
    settings: &Settings,
    input: R,
    output: W,
) -> Result<Outcome, ConfiguratorError> {
    match action {
        Action::Run { scenario } => {
            let path = scenario_path(scenario.as_deref(), settings);
            let scenario = load_scenario(path)?;
            scenario.validate()?;
            let answers = Prompter::new(input, output, settings).ask_scenario(&scenario)?;
            Ok(Outcome::Completed { answers })
        }
        Action::Check { scenario } => {
            let path = scenario_path(scenario.as_deref(), settings);
            let scenario = load_scenario(path)?;
            scenario.validate()?;
            info!(path = %path.display(), steps = scenario.steps.len(), "scenario is valid");
            Ok(Outcome::Checked {
                path: path.to_path_buf(),
                steps: scenario.steps.len(),
            })
        }
        Action::Set {
            file,
            key,
            value,
            value_type,
            enum_values,
        } => {
            validate_value(value_type, value, enum_values)?;
            let format = save_value(file, key, value)?;
            Ok(Outcome::ValueSet {
                file: file.clone(),
                key: key.clone(),
                value: value.clone(),
                format,
            })
        }
        Action::Settings => Ok(Outcome::Template(settings_template())),
    }
}

fn scenario_path<'a>(explicit: Option<&'a Path>, settings: &'a Settings) -> &'a Path {
    explicit.unwrap_or(&settings.scenario)
}
