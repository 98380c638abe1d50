//! Runner configuration.

use crate::config::{default_config_path, SettingsOverrides};
use std::path::{Path, PathBuf};

/// Where a run takes its settings from.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the settings file.
    config_path: PathBuf,
    /// Values that take precedence over the settings file.
    overrides: SettingsOverrides,
}

impl RunnerConfig {
    /// Creates a configuration reading settings from `config_path`.
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config_path,
            overrides: SettingsOverrides::default(),
        }
    }

    /// Sets overrides applied on top of the settings file.
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Returns the settings file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the configured overrides.
    pub fn overrides(&self) -> &SettingsOverrides {
        &self.overrides
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(default_config_path())
    }
}
