// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo's configuration, loading and saving the
//! button settings to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[layout]` - Spacing between the cells of the open layout
//! - `[closed]` - Scale and rotation of the center button while closed
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `MANY_OPTIONS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use many_options_button::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.layout.spacing = Some(20.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::button::ClosedTransform;
use crate::error::{Error, Result};
use iced::Degrees;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Open layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Spacing between neighbouring cells, in logical pixels.
    #[serde(default = "default_spacing", skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
        }
    }
}

/// Center transform applied while the button is closed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClosedConfig {
    #[serde(default = "default_closed_scale", skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,

    #[serde(
        default = "default_closed_rotation",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_degrees: Option<f32>,
}

impl Default for ClosedConfig {
    fn default() -> Self {
        Self {
            scale: default_closed_scale(),
            rotation_degrees: default_closed_rotation(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub closed: ClosedConfig,
}

impl Config {
    /// Effective spacing, clamped to the supported range.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.layout
            .spacing
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_SPACING)
            .clamp(MIN_SPACING, MAX_SPACING)
    }

    /// Effective closed transform, with the scale clamped to the supported range.
    #[must_use]
    pub fn closed_transform(&self) -> ClosedTransform {
        let scale = self
            .closed
            .scale
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_CLOSED_SCALE)
            .clamp(MIN_CLOSED_SCALE, MAX_CLOSED_SCALE);
        let degrees = self
            .closed
            .rotation_degrees
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_CLOSED_ROTATION_DEGREES);

        ClosedTransform::scaled(scale).with_rotation(Degrees(degrees))
    }
}

fn default_spacing() -> Option<f32> {
    Some(DEFAULT_SPACING)
}

fn default_closed_scale() -> Option<f32> {
    Some(DEFAULT_CLOSED_SCALE)
}

fn default_closed_rotation() -> Option<f32> {
    Some(DEFAULT_CLOSED_ROTATION_DEGREES)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("Ignoring {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
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

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Radians;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            layout: LayoutConfig {
                spacing: Some(20.0),
            },
            closed: ClosedConfig {
                scale: Some(0.5),
                rotation_degrees: Some(45.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[layout]\nspacing = \"wide\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[closed]\nscale = 0.5").expect("valid toml");
        assert_eq!(config.layout.spacing, Some(DEFAULT_SPACING));
        assert_eq!(config.closed.scale, Some(0.5));
        assert_eq!(
            config.closed.rotation_degrees,
            Some(DEFAULT_CLOSED_ROTATION_DEGREES)
        );
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            layout: LayoutConfig {
                spacing: Some(-5.0),
            },
            closed: ClosedConfig {
                scale: Some(50.0),
                rotation_degrees: None,
            },
        };
        assert_eq!(config.spacing(), MIN_SPACING);
        assert_eq!(config.closed_transform().scale, MAX_CLOSED_SCALE);
        assert_eq!(config.closed_transform().rotation, Radians(0.0));
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
