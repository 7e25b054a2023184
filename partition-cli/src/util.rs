//! Shared utility functions used across command modules.

use std::path::Path;

use partition_core::config::{ConfigManager, Settings};
use partition_core::partition::{Partition, PartitionError, PartitionId};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads the settings file, or defaults when there is none.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, CliError> {
    let manager = create_config_manager(config_path)?;
    Ok(manager.load_settings()?)
}

/// Find a node by `root`, full UUID or unique ID prefix
pub fn find_partition(root: &Partition, input: &str) -> Result<PartitionId, CliError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("root") {
        return Ok(root.id);
    }

    // A full UUID must match exactly
    if let Ok(id) = input.parse::<PartitionId>() {
        return if root.contains(id) {
            Ok(id)
        } else {
            Err(CliError::PartitionNotFound(input.to_string()))
        };
    }

    if input.is_empty() || !input.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        return Err(PartitionError::InvalidId(input.to_string()).into());
    }

    let prefix = input.to_lowercase();
    let matches: Vec<_> = root
        .ids()
        .into_iter()
        .filter(|id| id.to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [] => Err(CliError::PartitionNotFound(input.to_string())),
        [id] => Ok(*id),
        _ => {
            let names: Vec<_> = matches.iter().map(PartitionId::short).collect();
            Err(CliError::AmbiguousId {
                input: input.to_string(),
                matches: names.join(", "),
            })
        }
    }
}

/// Parse a size percentage
///
/// Any finite number is accepted; sizes are not clamped.
pub fn parse_size(s: &str) -> Result<f64, CliError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| PartitionError::InvalidSize(s.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PartitionError::InvalidSize(s.to_string()).into())
    }
}

/// Parse a coordinate of a drag point
pub fn parse_coordinate(s: &str) -> Result<f64, CliError> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CliError::Command(format!("invalid coordinate: {s}"))),
    }
}
