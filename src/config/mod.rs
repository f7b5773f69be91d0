// SPDX-License-Identifier: MPL-2.0
//! This module handles the alert presenter's configuration, loading and saving
//! it to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use alert_queue::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep alerts on screen a little longer
//! config.auto_hide_ms = Some(8_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.auto_hide_ms, Some(8_000));
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::ui::AutoHideDuration;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AlertQueue";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auto_hide_ms: Option<u64>,
    #[serde(default)]
    pub close_on_clickaway: Option<bool>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_hide_ms: Some(DEFAULT_AUTO_HIDE_MS),
            close_on_clickaway: Some(DEFAULT_CLOSE_ON_CLICKAWAY),
            diagnostics_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

impl Config {
    /// Display duration, clamped to the valid range.
    #[must_use]
    pub fn auto_hide(&self) -> AutoHideDuration {
        AutoHideDuration::from_millis(self.auto_hide_ms.unwrap_or(DEFAULT_AUTO_HIDE_MS))
    }

    #[must_use]
    pub fn close_on_clickaway(&self) -> bool {
        self.close_on_clickaway.unwrap_or(DEFAULT_CLOSE_ON_CLICKAWAY)
    }

    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(
            self.diagnostics_capacity
                .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// Returns defaults when no file exists yet.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file. Invalid TOML falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
