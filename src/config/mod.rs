// SPDX-License-Identifier: MPL-2.0
//! This module handles the library's configuration, including loading and saving
//! toast preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use lumen_ui::config::{self, Config};
//! use lumen_ui::ui::notifications::ToastPosition;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.toasts.position = Some(ToastPosition::BottomRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::ToastPosition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LumenUI";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastConfig,
}

/// Preferences for the toast overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default)]
    pub max_toasts: Option<usize>,
    #[serde(default)]
    pub position: Option<ToastPosition>,
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_toasts: Some(DEFAULT_MAX_TOASTS),
            position: Some(ToastPosition::default()),
            default_duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

impl ToastConfig {
    /// Capacity clamped to the accepted range.
    #[must_use]
    pub fn max_toasts(&self) -> usize {
        self.max_toasts
            .unwrap_or(DEFAULT_MAX_TOASTS)
            .clamp(MIN_MAX_TOASTS, MAX_MAX_TOASTS)
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position.unwrap_or_default()
    }

    /// Duration used by [`ToastOptions::timed`](crate::ui::notifications::ToastOptions::timed).
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(
            self.default_duration_ms
                .unwrap_or(DEFAULT_TOAST_DURATION_MS)
                .min(MAX_TOAST_DURATION_MS),
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_toast_settings() {
        let config = Config {
            toasts: ToastConfig {
                max_toasts: Some(3),
                position: Some(ToastPosition::BottomLeft),
                default_duration_ms: Some(2500),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_errors_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toasts]\nposition = \"center\"\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.toasts.position(), ToastPosition::Center);
        assert_eq!(loaded.toasts.max_toasts(), DEFAULT_MAX_TOASTS);
    }

    #[test]
    fn max_toasts_is_clamped() {
        let config = ToastConfig {
            max_toasts: Some(0),
            ..ToastConfig::default()
        };
        assert_eq!(config.max_toasts(), MIN_MAX_TOASTS);

        let config = ToastConfig {
            max_toasts: Some(10_000),
            ..ToastConfig::default()
        };
        assert_eq!(config.max_toasts(), MAX_MAX_TOASTS);
    }

    #[test]
    fn default_config_uses_top_right_and_five_toasts() {
        let config = Config::default();
        assert_eq!(config.toasts.position(), ToastPosition::TopRight);
        assert_eq!(config.toasts.max_toasts(), 5);
        assert_eq!(
            config.toasts.default_duration(),
            Duration::from_millis(DEFAULT_TOAST_DURATION_MS)
        );
    }
}
