//! Resolver configuration: defaults, JSON file, and environment overrides.

pub mod models;

pub use models::*;

use crate::types::errors::ConfigError;
use std::path::{Path, MAIN_SEPARATOR};

pub const ENV_DIRECT_SUFFIX: &str = "MODPATH_DIRECT_SUFFIX";
pub const ENV_CONTAINER_SUFFIX: &str = "MODPATH_CONTAINER_SUFFIX";
pub const ENV_STAGING_DIR: &str = "MODPATH_STAGING_DIR";
pub const ENV_SEARCH_PATH_VAR: &str = "MODPATH_SEARCH_PATH_VAR";

impl ResolverConfig {
    /// Load a JSON config file. Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ResolverConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `MODPATH_*` variables, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv(); // Try to load .env, ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let overrides = [
            (ENV_DIRECT_SUFFIX, &mut config.direct_suffix),
            (ENV_CONTAINER_SUFFIX, &mut config.container_suffix),
            (ENV_STAGING_DIR, &mut config.staging_dir_name),
            (ENV_SEARCH_PATH_VAR, &mut config.search_path_var),
        ];
        for (key, field) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                log::debug!("Config override {key}={value}");
                *field = value;
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.direct_suffix.is_empty() || self.container_suffix.is_empty() {
            return Err(ConfigError::Invalid("suffixes must not be empty".into()));
        }
        if self.direct_suffix == self.container_suffix {
            return Err(ConfigError::Invalid(format!(
                "direct and container suffix are both '{}'",
                self.direct_suffix
            )));
        }

        let staging = self.staging_dir_name.as_str();
        if staging.is_empty() || staging == "." || staging == ".." {
            return Err(ConfigError::Invalid(format!(
                "staging directory name '{staging}' is not usable"
            )));
        }
        if staging.contains('/') || staging.contains(MAIN_SEPARATOR) {
            return Err(ConfigError::Invalid(format!(
                "staging directory name '{staging}' must be a single path component"
            )));
        }
        // The staging directory sits inside the source directory and must
        // classify as ignored when that directory is enumerated.
        if staging.ends_with(&self.direct_suffix) || staging.ends_with(&self.container_suffix) {
            return Err(ConfigError::Invalid(format!(
                "staging directory name '{staging}' ends with an archive suffix"
            )));
        }

        if self.search_path_var.is_empty() {
            return Err(ConfigError::Invalid("search path variable is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
