// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay tool's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use phishintel_overlay::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.snap_to_pixels = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::{DEFAULT_LOG_LEVEL, DEFAULT_SNAP_TO_PIXELS};

use crate::error::{Error, Result};
use crate::overlay::OverlayOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PhishIntel";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub snap_to_pixels: Option<bool>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snap_to_pixels: Some(DEFAULT_SNAP_TO_PIXELS),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Config {
    /// Overlay placement options derived from this configuration.
    #[must_use]
    pub fn overlay_options(&self) -> OverlayOptions {
        OverlayOptions {
            snap_to_pixels: self.snap_to_pixels.unwrap_or(DEFAULT_SNAP_TO_PIXELS),
        }
    }

    /// Log filter to hand to `env_logger` when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// The effective configuration read from a settings file.
///
/// `fallback` holds the parse failure when the file was not valid TOML and
/// defaults were substituted. It is kept rather than logged on the spot so a
/// binary can report it after its logger is initialised.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub fallback: Option<Error>,
}

impl LoadedConfig {
    /// Logs the fallback to defaults, if one happened.
    pub fn report_fallback(&self) {
        if let Some(err) = &self.fallback {
            log::warn!("Ignoring invalid configuration, using defaults: {}", err);
        }
    }
}

pub fn load() -> Result<Config> {
    let loaded = load_checked()?;
    loaded.report_fallback();
    Ok(loaded.config)
}

/// Like [`load`], but leaves reporting an invalid settings file to the caller.
pub fn load_checked() -> Result<LoadedConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path_checked(&path);
        }
    }
    Ok(LoadedConfig::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a configuration file. Unparseable content falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let loaded = load_from_path_checked(path)?;
    loaded.report_fallback();
    Ok(loaded.config)
}

/// Like [`load_from_path`], but returns the parse failure instead of logging it.
pub fn load_from_path_checked(path: &Path) -> Result<LoadedConfig> {
    let content = fs::read_to_string(path)?;
    Ok(match toml::from_str(&content) {
        Ok(config) => LoadedConfig {
            config,
            fallback: None,
        },
        Err(err) => LoadedConfig {
            config: Config::default(),
            fallback: Some(Error::Config(format!("{}: {}", path.display(), err))),
        },
    })
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
