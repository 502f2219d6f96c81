//! Application settings for the configurator itself.
//!
//! These are distinct from the files a scenario edits: they control where the
//! default scenario lives and how the prompt loop behaves. Built on
//! [confique](https://docs.rs/confique), so every field has a compiled
//! default and a doc comment that ends up in the generated template.
//!
//! # Sources
//!
//! Highest priority first:
//!
//! 1. Environment variables (`CONFIGURATOR_SCENARIO`, ...).
//! 2. `configurator.toml` in the current working directory.
//! 3. `configurator.toml` in the platform config directory (XDG on Linux,
//!    `~/Library/Application Support` on macOS).
//! 4. Compiled defaults.
//!
//! Missing files are silently skipped.

use std::path::PathBuf;

use confique::Config;

use crate::error::ConfiguratorError;

pub const APP_NAME: &str = "configurator";
pub const SETTINGS_FILE: &str = "configurator.toml";

#[derive(Config, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Scenario file used when none is given on the command line.
    #[config(env = "CONFIGURATOR_SCENARIO", default = "scenario.json")]
    pub scenario: PathBuf,

    /// Answer that skips the current step without writing anything.
    /// Compared case-insensitively.
    #[config(env = "CONFIGURATOR_SKIP_KEYWORD", default = "skip")]
    pub skip_keyword: String,

    /// Use a step's default value when the operator submits an empty answer.
    #[config(env = "CONFIGURATOR_USE_DEFAULTS", default = true)]
    pub use_defaults: bool,
}

/// Settings file locations in priority-descending order.
pub fn settings_files() -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        files.push(cwd.join(SETTINGS_FILE));
    }
    if let Some(proj) = directories::ProjectDirs::from("", "", APP_NAME) {
        files.push(proj.config_dir().join(SETTINGS_FILE));
    }
    files
}

/// Load settings from the environment and the standard file locations.
pub fn load_settings() -> Result<Settings, ConfiguratorError> {
    load_settings_from(&settings_files())
}

/// Like [`load_settings`] but reading an explicit list of files
/// (priority-descending) instead of the standard locations.
pub fn load_settings_from(files: &[PathBuf]) -> Result<Settings, ConfiguratorError> {
    let mut builder = Settings::builder().env();
    for file in files {
        builder = builder.file(file);
    }
    Ok(builder.load()?)
}

/// Commented TOML template listing every setting with its default.
pub fn settings_template() -> String {
    confique::toml::template::<Settings>(confique::toml::FormatOptions::default())
}
