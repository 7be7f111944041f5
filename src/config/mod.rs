// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences from a `settings.toml` file.
//!
//! The file is organized in sections:
//!
//! ```toml
//! [general]
//! language = "zh-CN"
//! theme_mode = "dark"
//!
//! [glass]
//! intensity = "high"
//! border = "normal"
//! shadow = "2xl"
//! rounded = "rounded-[28px]"
//!
//! [logging]
//! filter = "iced_frost=debug"
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use iced_frost::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load_with_override(None);
//!
//! // Modify a setting
//! config.general.language = Some("zh-CN".to_string());
//!
//! // Save the modified configuration
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::{Error, Result};
use crate::ui::glass::GlassConfig;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFrost";

/// i18n key of the warning returned when the settings file is unreadable.
pub const CONFIG_LOAD_ERROR_KEY: &str = "config-load-error";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Default look of the showcase glass panel.
    #[serde(default)]
    pub glass: GlassConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
        .map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from `base_dir`, or the platform config directory
/// when `None`.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable one yields the defaults and the i18n key
/// of a warning to show.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings ignored");
                    return (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to `base_dir`, or the platform config directory
/// when `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
