//! Scenario-driven configuration wizard.
//!
//! A scenario is a flat list of steps. Each step names a target file, a key
//! and a declared value type. The configurator prompts for each step,
//! validates the answer against the type, and writes accepted values into the
//! target file:
//!
//! ```ignore
//! let settings = configurator::load_settings()?;
//! let scenario = configurator::load_scenario(Path::new("scenario.json"))?;
//! scenario.validate()?;
//! let stdin = std::io::stdin().lock();
//! Prompter::new(stdin, std::io::stdout(), &settings).ask_scenario(&scenario)?;
//! ```
//!
//! # Value types
//!
//! | Type | Accepts |
//! |------|---------|
//! | `string`, `any` | anything |
//! | `int` | signed base-10 integer |
//! | `bool` | `true` / `false`, any case |
//! | `ip` | IPv4 or IPv6 literal |
//! | `port` | 1 through 65535 |
//! | `path` | anything resolvable to an absolute path (need not exist) |
//! | `enum` | exact member of the step's `enumValues` |
//!
//! # File formats
//!
//! The target file's extension picks the backend, case-insensitively:
//!
//! - **`.json`**: the file must hold a JSON object. Dotted keys
//!   (`server.port`) address nested objects, creating missing ones. Values are
//!   always written as JSON strings; the rest of the document keeps its types
//!   and key order. Output is indented with two spaces.
//! - **`.ini`** and **everything else**: `key=value` lines. Every line
//!   starting with `key=` is replaced; if none exists a line is appended.
//!   Other lines, including `[section]` headers and comments, are kept
//!   verbatim.
//!
//! Target files must already exist. Every save reads the whole file, patches
//! it in memory, and rewrites it. There is no locking and no backup.
//!
//! # Validation before write
//!
//! A value reaches the disk only after [`validate_value`] accepts it.
//! Rejections carry an operator-facing reason and make the prompt loop ask
//! again; the skip keyword moves on without writing.
//!
//! # Error handling
//!
//! All fallible operations return [`ConfiguratorError`]. Errors name the file
//! involved, and JSON structure conflicts name the offending key segment.

pub mod error;
pub mod types;

#[cfg(feature = "clap")]
mod cli;
mod format;
mod ops;
mod persist;
mod prompt;
mod scenario;
mod settings;
mod validate;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::{Cli, Command};
pub use error::ConfiguratorError;
pub use format::{Format, PatchError, set_json, set_line};
pub use ops::{Outcome, handle};
pub use persist::save_value;
pub use prompt::{Answer, Prompter, StepOutcome};
pub use scenario::{Scenario, Step, load_scenario};
pub use settings::{Settings, load_settings, load_settings_from, settings_files, settings_template};
pub use types::{Action, ValueType};
pub use validate::{ValidationError, validate_value};
