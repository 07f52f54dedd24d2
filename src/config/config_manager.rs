use std::fs;
use std::path::Path;
use crate::errors::{GradleActionError, GradleActionResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads the TOML config at `path`, or the defaults when the file is absent.
    pub fn load(path: &Path) -> GradleActionResult<Config> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| GradleActionError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| GradleActionError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;
        Ok(config)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (name, value) in &config.inputs {
            if !matches!(value, toml::Value::Boolean(_) | toml::Value::String(_)) {
                errors.push(format!("Input '{}' must be a boolean or a string, got {}", name, value.type_str()));
            }
        }

        if let Some(directory) = &config.cache.directory {
            if directory.exists() && !directory.is_dir() {
                errors.push(format!("Cache directory is not a directory: {}", directory.display()));
            }
        }

        if let Some(directory) = &config.artifacts.directory {
            if directory.exists() && !directory.is_dir() {
                errors.push(format!("Artifacts directory is not a directory: {}", directory.display()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
