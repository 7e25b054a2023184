//! Error types for the partition core library
//!
//! Tree edits never fail. These errors come from the layers around the
//! tree: configuration files, tracing setup and parsing user input.

use thiserror::Error;

use crate::partition::PartitionError;
use crate::tracing::TracingError;

/// Errors from loading, validating or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML for the settings schema.
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be turned into TOML.
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A setting holds an unusable value.
    #[error("Invalid setting: {0}")]
    Invalid(String),

    /// The platform has no per-user config directory.
    #[error("Could not determine the config directory")]
    NoConfigDir,
}

/// Top-level error for the core library.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Partition parsing or lookup error
    #[error(transparent)]
    Partition(#[from] PartitionError),

    /// Tracing initialization error
    #[error(transparent)]
    Tracing(#[from] TracingError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
