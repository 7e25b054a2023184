//! CLI error types and exit codes.

use partition_core::error::{ConfigError, CoreError};
use partition_core::partition::PartitionError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, input, IO or other failures
    pub const GENERAL_ERROR: i32 = 1;
    /// A tree invariant did not hold after an edit
    pub const INVARIANT_VIOLATION: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No node matches the given ID
    #[error("Partition not found: {0}")]
    PartitionNotFound(String),

    /// Several nodes match the given ID prefix
    #[error("Ambiguous partition ID '{input}'. Matches: {matches}")]
    AmbiguousId {
        /// What the user typed
        input: String,
        /// Short IDs of the matching nodes
        matches: String,
    },

    /// A shell line could not be understood
    #[error("Invalid command: {0}")]
    Command(String),

    /// Invalid partition input (direction, size, ID)
    #[error(transparent)]
    Partition(#[from] PartitionError),

    /// No gutter under the drag start point
    #[error("No gutter at {0}")]
    NoGutter(String),

    /// Tree invariant violated
    #[error("Invariant violated: {0}")]
    Invariant(String),

    /// A script line failed
    #[error("line {line}: {source}")]
    Script {
        /// One-based line number in the script
        line: usize,
        /// What went wrong on that line
        source: Box<CliError>,
    },

    /// Output rendering error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config(other.to_string()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config(e) => e.into(),
            CoreError::Partition(e) => Self::Partition(e),
            CoreError::Tracing(e) => Self::Config(e.to_string()),
            CoreError::Io(e) => Self::Io(e),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, input, output, IO)
    /// - 2: Invariant violation found by `random`
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Invariant(_) => exit_codes::INVARIANT_VIOLATION,
            Self::Script { source, .. } => source.exit_code(),
            Self::Config(_)
            | Self::PartitionNotFound(_)
            | Self::AmbiguousId { .. }
            | Self::Command(_)
            | Self::Partition(_)
            | Self::NoGutter(_)
            | Self::Output(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
