// src/config.rs

//! Configuration loading utilities.
//!
//! This module provides convenience functions for loading configuration
//! and applying command-line overrides.

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::Config;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "nps-sites.toml";

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cache_path: Option<PathBuf>,
    pub api_key: Option<String>,
}

/// Load configuration from a TOML file.
///
/// An explicitly requested file must exist. The default file is optional
/// and falls back to built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            log::info!("Loading configuration from {}", path.display());
            Config::load(path)
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
                Ok(Config::load_or_default(path))
            } else {
                log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}

/// Apply overrides on top of loaded configuration.
///
/// Blank API keys are ignored, whether they come from the file, the command
/// line or the environment.
pub fn apply_overrides(config: &mut Config, overrides: Overrides) {
    if let Some(path) = overrides.cache_path {
        config.cache.path = path;
    }
    if let Some(key) = overrides.api_key.filter(|k| !k.trim().is_empty()) {
        config.places.api_key = Some(key);
    }
    if config
        .places
        .api_key
        .as_deref()
        .is_some_and(|k| k.trim().is_empty())
    {
        log::warn!("places.api_key is blank; nearby searches are disabled");
        config.places.api_key = None;
    }
}

/// Load, override and validate in one step.
pub fn load_all(path: Option<&Path>, overrides: Overrides) -> Result<Config> {
    let mut config = load_config(path)?;
    apply_overrides(&mut config, overrides);
    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid configuration: {e}")))?;
    Ok(config)
}
