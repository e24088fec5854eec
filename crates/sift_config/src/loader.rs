//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::{Fallback, RoutingConfig};
use std::collections::HashSet;
use std::path::Path;

/// The configuration file name looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "sift.toml";

/// Loads and validates `sift.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<RoutingConfig, ConfigError> {
    let content = std::fs::read_to_string(project_dir.join(CONFIG_FILE_NAME))?;
    load_config_from_str(&content)
}

/// Parses and validates a `sift.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<RoutingConfig, ConfigError> {
    let config: RoutingConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that every file has a path, no file is listed twice, and at least
/// one destination exists.
fn validate_config(config: &RoutingConfig) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (idx, file) in config.files.iter().enumerate() {
        if file.path.is_empty() {
            return Err(ConfigError::MissingField(format!("files[{idx}].path")));
        }
        if !seen.insert(file.path.as_str()) {
            return Err(ConfigError::DuplicateFile(file.path.clone()));
        }
    }
    if config.files.is_empty() && config.routing.fallback == Fallback::None {
        return Err(ConfigError::ValidationError(
            "no files are routed and the fallback is disabled".to_string(),
        ));
    }
    Ok(())
}
