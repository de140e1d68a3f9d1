//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::EstimatorConfig;
use std::path::Path;

/// The file name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "primest.toml";

/// Loads and validates `primest.toml` from a directory.
///
/// A missing file is not an error: the built-in defaults are returned.
pub fn load_config(dir: &Path) -> Result<EstimatorConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(EstimatorConfig::default());
    }
    load_config_from_file(&config_path)
}

/// Loads and validates a configuration from an explicit file path.
///
/// A relative `[tables] dir` is resolved against the file's directory.
pub fn load_config_from_file(path: &Path) -> Result<EstimatorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut config = load_config_from_str(&content)?;
    if let (Some(dir), Some(base)) = (config.tables.dir.as_ref(), path.parent()) {
        if dir.is_relative() {
            config.tables.dir = Some(base.join(dir));
        }
    }
    Ok(config)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<EstimatorConfig, ConfigError> {
    let config: EstimatorConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are usable.
fn validate_config(config: &EstimatorConfig) -> Result<(), ConfigError> {
    let accuracy = config.estimator.accuracy;
    if accuracy == 0 || accuracy > 100 {
        return Err(ConfigError::ValidationError(format!(
            "estimator.accuracy must be in 1..=100, got {accuracy}"
        )));
    }
    let cycle = config.estimator.default_cycle_seconds;
    if !(cycle.is_finite() && cycle > 0.0) {
        return Err(ConfigError::ValidationError(format!(
            "estimator.default_cycle_seconds must be positive, got {cycle}"
        )));
    }
    if config.estimator.technologies.is_empty() {
        return Err(ConfigError::ValidationError(
            "estimator.technologies must list at least one node".to_string(),
        ));
    }
    Ok(())
}
