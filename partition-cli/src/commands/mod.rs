//! Command handler modules for the CLI.

mod completions;
mod config;
mod demo;
mod random;
mod shell;

use std::path::Path;

use crate::cli::{Commands, OutputFormat};
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(
    config_path: Option<&Path>,
    format: OutputFormat,
    command: Commands,
) -> Result<(), CliError> {
    match command {
        Commands::Shell { script } => shell::cmd_shell(config_path, format, script.as_deref()),
        Commands::Demo => demo::cmd_demo(config_path, format),
        Commands::Random { ops, seed } => random::cmd_random(config_path, format, ops, seed),
        Commands::Config(action) => config::cmd_config(config_path, action),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
