//! Configuration management
//!
//! This module provides the `ConfigManager` for loading and saving the
//! settings file in TOML format.

mod manager;
pub mod settings;

pub use manager::{APP_DIR, ConfigManager, SETTINGS_FILE};
pub use settings::{ColorMode, ColorSettings, LayoutSettings, LoggingSettings, Settings};
