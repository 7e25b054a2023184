//! `partition` CLI - Command-line interface for partition layout trees
//!
//! Provides an editing shell, a guided demo, randomized invariant checks
//! and settings file management.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use partition_core::config::LoggingSettings;
use partition_core::{TracingConfig, TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    setup_logging(&cli);

    let result = commands::dispatch(config_path, cli.format, cli.command);

    if let Err(e) = result {
        tracing::debug!(exit_code = e.exit_code(), "Command failed");
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

/// Initializes tracing from the settings file, raised by `-v` or lowered
/// by `--quiet`.
///
/// A settings file that fails to load falls back to default logging; the
/// command itself reports the problem.
fn setup_logging(cli: &Cli) {
    let logging = util::load_settings(cli.config.as_deref())
        .map(|settings| settings.logging)
        .unwrap_or_default();

    let level = if cli.quiet {
        TracingLevel::Error
    } else {
        TracingLevel::from_verbosity(cli.verbose, logging.level)
    };
    let config = TracingConfig::from(&LoggingSettings { level, ..logging });

    if let Err(e) = init_tracing(&config) {
        eprintln!("Warning: {e}");
    }
}
