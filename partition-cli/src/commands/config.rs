//! Settings file management commands.

use std::io::Write;
use std::path::Path;

use partition_core::config::{ConfigManager, Settings};

use crate::cli::ConfigCommands;
use crate::error::CliError;
use crate::util::create_config_manager;

/// Config command handler
pub fn cmd_config(config_path: Option<&Path>, action: ConfigCommands) -> Result<(), CliError> {
    let manager = create_config_manager(config_path)?;
    let stdout = std::io::stdout();
    run(&manager, action, &mut stdout.lock())
}

fn run(manager: &ConfigManager, action: ConfigCommands, out: &mut dyn Write) -> Result<(), CliError> {
    match action {
        ConfigCommands::Path => {
            writeln!(out, "{}", manager.settings_path().display())?;
        }
        ConfigCommands::Show => {
            let settings = manager.load_settings()?;
            out.write_all(settings.to_toml_string()?.as_bytes())?;
        }
        ConfigCommands::Init { force } => {
            let path = manager.settings_path();
            if path.exists() && !force {
                return Err(CliError::Config(format!(
                    "{} already exists, use --force to overwrite",
                    path.display()
                )));
            }
            let path = manager.save_settings(&Settings::default())?;
            tracing::info!(path = %path.display(), "Wrote default settings");
            writeln!(out, "Wrote {}", path.display())?;
        }
    }
    Ok(())
}
