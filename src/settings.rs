//! Process-wide alert defaults with persistent storage

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::publish::DEFAULT_NAMESPACE;

/// Default auto-close delay in milliseconds
pub const DEFAULT_AUTOCLOSE_MS: u64 = 1800;

/// Defaults applied to every new alert, read once at builder construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Auto-close timer for new alerts, in milliseconds
    #[serde(default = "default_autoclose_ms")]
    pub autoclose_ms: u64,
    /// Prefix for staged flash keys
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_autoclose_ms() -> u64 {
    DEFAULT_AUTOCLOSE_MS
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autoclose_ms: DEFAULT_AUTOCLOSE_MS,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl Settings {
    /// Get the config directory path (platform-specific)
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("sweet-flash");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        Ok(config_dir)
    }

    fn settings_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("settings.json"))
    }

    /// Load settings from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Load settings from `path`, or write and return defaults if the file
    /// doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let default_settings = Self::default();
            default_settings.save_to(path)?;
            return Ok(default_settings);
        }

        let contents = fs::read_to_string(path).context("Failed to read settings file")?;

        let settings: Settings =
            serde_json::from_str(&contents).context("Failed to parse settings file")?;

        Ok(settings)
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    /// Save settings to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(path, contents).context("Failed to write settings file")?;

        Ok(())
    }
}
