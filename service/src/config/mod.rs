//! Configuration loading for the export service
//!
//! This module provides configuration loading from YAML files with
//! environment variable substitution support.

pub mod validation;

use export_core::{ExportConfig, ExportError, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::env;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

pub use validation::validate_values;

/// Environment variable naming a configuration file to load
pub const CONFIG_PATH_ENV: &str = "XLSX_EXPORT_CONFIG";

/// `${VAR}` or `${VAR:-default}`
static ENV_VAR_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\$\{([^}:]+)(?::(-)?([^}]*))?\}").ok());

/// Load configuration from `YAML` file with environment variable substitution
///
/// # Errors
///
/// Returns `ExportError::Io` if the file cannot be read
/// Returns `ExportError::Config` if the YAML cannot be parsed
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    let substituted = substitute_env_vars(&contents);

    serde_yaml::from_str(&substituted).map_err(|e| {
        ExportError::config(format!(
            "Failed to parse YAML config {}: {e}",
            path.display()
        ))
    })
}

/// Load and validate an [`ExportConfig`] from a YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or fails validation
pub fn load_and_validate_config(path: &Path) -> Result<ExportConfig> {
    let config: ExportConfig = load_config(path)?;
    validate_values(&config)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load the file named by `XLSX_EXPORT_CONFIG`, or fall back to defaults
///
/// # Errors
///
/// Returns an error if the variable is set but the file cannot be loaded or
/// is invalid
pub fn load_environment_config() -> Result<ExportConfig> {
    match env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => load_and_validate_config(Path::new(&path)),
        _ => Ok(ExportConfig::default()),
    }
}

/// Substitute environment variables in the format ${VAR:-default}
pub fn substitute_env_vars(content: &str) -> String {
    let Some(re) = ENV_VAR_PATTERN.as_ref() else {
        return content.to_string();
    };

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default_value = caps.get(3).map_or("", |m| m.as_str());

        env::var(var_name).unwrap_or_else(|_| default_value.to_string())
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_uses_default_when_unset() {
        let out = substitute_env_vars("port: ${XLSX_EXPORT_TEST_SURELY_UNSET:-9090}");
        assert_eq!(out, "port: 9090");
    }

    #[test]
    fn test_substitute_leaves_plain_text() {
        assert_eq!(substitute_env_vars("host: 0.0.0.0"), "host: 0.0.0.0");
    }
}
