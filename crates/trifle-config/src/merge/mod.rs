//! Configuration layering, fallback logic, and environment overrides
//!
//! Precedence, lowest to highest: built-in defaults, trifle.toml, `TRIFLE_*`
//! environment variables, explicit overrides.

use crate::toml::{validate_precision, TrifleToml};
use crate::ConfigResult;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashMap;
use tracing::{debug, info};
use trifle_core::error::TrifleError;

/// File name searched for when loading project configuration
pub const CONFIG_FILE_NAME: &str = "trifle.toml";

/// Prefix of recognized environment variables
pub const ENV_PREFIX: &str = "TRIFLE_";

/// Main configuration loading interface
pub struct ConfigLoader {
    /// Directory the search for trifle.toml starts from
    cwd: Utf8PathBuf,
    /// Highest directory the search may reach
    ceiling: Option<Utf8PathBuf>,
}

/// Configuration layering and merging
pub struct ConfigLayering;

/// Configuration source tracking
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Built-in defaults, no file found
    Default,
    /// A trifle.toml file
    File(Utf8PathBuf),
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new(cwd: Utf8PathBuf) -> Self {
        Self { cwd, ceiling: None }
    }

    /// Stop the upward search at `ceiling` (inclusive)
    pub fn with_ceiling(mut self, ceiling: Utf8PathBuf) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    /// Find trifle.toml in `cwd` or the nearest ancestor that has one
    pub fn find_config_file(&self) -> Option<Utf8PathBuf> {
        let mut current: Option<&Utf8Path> = Some(self.cwd.as_path());

        while let Some(dir) = current {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if self.ceiling.as_deref() == Some(dir) {
                break;
            }
            current = dir.parent();
        }

        None
    }

    /// Load the project configuration, falling back to defaults
    pub fn load_project_config(&self) -> ConfigResult<(TrifleToml, ConfigSource)> {
        match self.find_config_file() {
            Some(path) => {
                let config = crate::toml::load_from_file(&path)?;
                Ok((config, ConfigSource::File(path)))
            },
            None => {
                debug!("No {} found from {}, using defaults", CONFIG_FILE_NAME, self.cwd);
                Ok((TrifleToml::default(), ConfigSource::Default))
            },
        }
    }

    /// Load the project configuration with environment and explicit overrides applied
    pub fn load(&self, explicit_overrides: &HashMap<String, String>) -> ConfigResult<TrifleToml> {
        let (config, source) = self.load_project_config()?;
        info!("Loaded configuration from {:?}", source);

        ConfigLayering::merge_configs(
            config,
            &ConfigLayering::collect_env_overrides(),
            explicit_overrides,
        )
    }
}

impl ConfigLayering {
    /// Apply environment overrides, then explicit overrides, to `base`
    pub fn merge_configs(
        base: TrifleToml,
        env_overrides: &HashMap<String, String>,
        explicit_overrides: &HashMap<String, String>,
    ) -> ConfigResult<TrifleToml> {
        let mut merged = base;

        Self::apply_env_overrides(&mut merged, env_overrides)?;
        Self::apply_explicit_overrides(&mut merged, explicit_overrides)?;

        Ok(merged)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(
        config: &mut TrifleToml,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<()> {
        for (key, value) in overrides {
            match key.as_str() {
                "TRIFLE_AREA_PRECISION" => {
                    config.area.precision = parse_precision(key, value)?;
                    debug!("Area precision set to {} from environment", config.area.precision);
                },
                _ => {
                    // Unknown environment variable, ignore
                },
            }
        }

        Ok(())
    }

    /// Apply explicit dotted-key overrides such as `area.precision`
    fn apply_explicit_overrides(
        config: &mut TrifleToml,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<()> {
        for (key, value) in overrides {
            match key.as_str() {
                "area.precision" => {
                    config.area.precision = parse_precision(key, value)?;
                },
                other => {
                    return Err(TrifleError::ConfigValidation {
                        field: other.to_string(),
                        reason: "unknown configuration key".to_string(),
                    });
                },
            }
        }

        Ok(())
    }

    /// Collect `TRIFLE_*` environment variables
    pub fn collect_env_overrides() -> HashMap<String, String> {
        std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect()
    }
}

fn parse_precision(field: &str, value: &str) -> ConfigResult<u32> {
    let precision = value
        .trim()
        .parse::<u32>()
        .map_err(|e| TrifleError::ConfigValidation {
            field: field.to_string(),
            reason: format!("'{}' is not a valid precision: {}", value, e),
        })?;
    validate_precision(field, precision)?;
    Ok(precision)
}
