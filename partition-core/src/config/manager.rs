//! Loading and saving the settings file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::tracing::span_names;

use super::settings::Settings;

/// Name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Name of the application directory under the platform config directory.
pub const APP_DIR: &str = "partition";

/// Locates and reads/writes the settings file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the platform config directory
    /// (e.g. `~/.config/partition`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has none.
    pub fn new() -> Result<Self, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join(APP_DIR)))
    }

    /// Creates a manager for a custom directory.
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the config directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the path of the settings file.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings, falling back to defaults when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        let path = self.settings_path();
        let _span = tracing::debug_span!(span_names::CONFIG_LOAD, path = %path.display()).entered();

        if !path.exists() {
            tracing::debug!("Settings file not found, using defaults");
            return Ok(Settings::default());
        }
        let text = fs::read_to_string(&path)?;
        Settings::from_toml_str(&text)
    }

    /// Writes settings, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or cannot be written.
    pub fn save_settings(&self, settings: &Settings) -> Result<PathBuf, ConfigError> {
        let path = self.settings_path();
        let _span = tracing::debug_span!(span_names::CONFIG_SAVE, path = %path.display()).entered();

        settings.validate()?;
        self.ensure_config_dir()?;
        fs::write(&path, settings.to_toml_string()?)?;
        tracing::info!("Settings saved");
        Ok(path)
    }

    /// Creates the config directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}
