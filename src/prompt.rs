//! The interactive loop: show a step, read an answer, validate, persist.
//!
//! [`Prompter`] is generic over its input and output so the binary can drive
//! it from stdin/stdout and tests from in-memory buffers. Steps run strictly
//! in order; a step only ends when its value is saved or the operator skips
//! it. Rejected input and failed writes both re-prompt the same step.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::error::ConfiguratorError;
use crate::persist::save_value;
use crate::scenario::{Scenario, Step};
use crate::settings::Settings;
use crate::validate::validate_value;

/// How a single step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Saved(String),
    Skipped,
}

/// A saved answer, in scenario order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub key: String,
    pub value: String,
}

pub struct Prompter<'s, R, W> {
    input: R,
    output: W,
    settings: &'s Settings,
}

impl<'s, R: BufRead, W: Write> Prompter<'s, R, W> {
    pub fn new(input: R, output: W, settings: &'s Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Run every step in order and return the saved answers.
    pub fn ask_scenario(&mut self, scenario: &Scenario) -> Result<Vec<Answer>, ConfiguratorError> {
        info!(steps = scenario.steps.len(), "starting scenario");
        let mut answers = Vec::new();

        for (i, step) in scenario.steps.iter().enumerate() {
            if let StepOutcome::Saved(value) = self.ask_step(step, i + 1)? {
                answers.push(Answer {
                    key: step.key.clone(),
                    value,
                });
            }
        }

        self.print_summary(&answers)?;
        info!(saved = answers.len(), "scenario finished");
        Ok(answers)
    }

    /// Prompt for one step until it is saved or skipped.
    pub fn ask_step(&mut self, step: &Step, number: usize) -> Result<StepOutcome, ConfiguratorError> {
        loop {
            self.print_header(step, number)?;
            let raw = self.read_answer()?;

            if raw.eq_ignore_ascii_case(&self.settings.skip_keyword) {
                debug!(key = %step.key, "step skipped");
                self.say("Step skipped.\n")?;
                return Ok(StepOutcome::Skipped);
            }

            let input = match (&step.default, raw.is_empty() && self.settings.use_defaults) {
                (Some(default), true) => default.clone(),
                _ => raw,
            };

            if let Err(e) = validate_value(&step.value_type, &input, &step.enum_values) {
                warn!(key = %step.key, error = %e, "input rejected");
                let msg = format!("Error: {e}\n{}\n", self.retry_hint());
                self.say(&msg)?;
                continue;
            }

            if let Err(e) = save_value(&step.file, &step.key, &input) {
                warn!(key = %step.key, error = %e, "write failed");
                let msg = format!(
                    "Failed to write {}: {e}\n{}\n",
                    step.file.display(),
                    self.retry_hint()
                );
                self.say(&msg)?;
                continue;
            }

            self.say("Value saved.\n\n")?;
            return Ok(StepOutcome::Saved(input));
        }
    }

    fn print_header(&mut self, step: &Step, number: usize) -> Result<(), ConfiguratorError> {
        let mut header = format!(
            "Step {number}\nFile    : {}\nKey     : {}\nType    : {}\n",
            step.file.display(),
            step.key,
            step.value_type
        );
        if let Some(comment) = &step.comment {
            header.push_str(&format!("Comment : {comment}\n"));
        }
        if !step.enum_values.is_empty() {
            header.push_str(&format!("Allowed : {}\n", step.enum_values.join(", ")));
        }
        if let Some(default) = &step.default {
            header.push_str(&format!("Default : {default}\n"));
        }
        header.push_str(&format!(
            "Enter a value (or '{}' to skip): ",
            self.settings.skip_keyword
        ));
        self.say(&header)
    }

    fn print_summary(&mut self, answers: &[Answer]) -> Result<(), ConfiguratorError> {
        let mut summary = String::from("Input finished. Saved values:\n");
        for answer in answers {
            summary.push_str(&format!("  {} = {}\n", answer.key, answer.value));
        }
        self.say(&summary)
    }

    fn retry_hint(&self) -> String {
        format!(
            "Try again or enter '{}' to skip.",
            self.settings.skip_keyword
        )
    }

    /// Read one trimmed line. End of input aborts the run.
    fn read_answer(&mut self) -> Result<String, ConfiguratorError> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(ConfiguratorError::Terminal)?;
        if n == 0 {
            return Err(ConfiguratorError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) -> Result<(), ConfiguratorError> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(ConfiguratorError::Terminal)
    }
}
