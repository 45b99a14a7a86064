// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[compare]` - Comparison sources, presentation and slider tuning
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `TERRA_COMPARE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use terra_compare::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::compare::state::{Orientation, Steps};
use crate::ui::theming::{CompareTheme, ThemeMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Comparison widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompareConfig {
    /// Source shown as the "before" layer when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_src: Option<String>,

    /// Source shown as the "after" layer when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_src: Option<String>,

    /// Accessible description shared by both layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Divider accent color as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,

    /// Presentation bucket for the surrounding panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<CompareTheme>,

    /// Orientation used when no remembered orientation exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// Arrow key step.
    #[serde(
        default = "default_keyboard_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyboard_step: Option<f32>,

    /// Arrow key step with Shift held.
    #[serde(
        default = "default_keyboard_step_large",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyboard_step_large: Option<f32>,

    /// Autoplay increment per frame.
    #[serde(
        default = "default_autoplay_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_step: Option<f32>,

    /// Transition duration in milliseconds; zero disables smoothing.
    #[serde(
        default = "default_smoothing_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub smoothing_ms: Option<u64>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            before_src: None,
            after_src: None,
            alt: None,
            accent_color: None,
            theme: Some(CompareTheme::default()),
            orientation: Some(Orientation::default()),
            keyboard_step: default_keyboard_step(),
            keyboard_step_large: default_keyboard_step_large(),
            autoplay_step: default_autoplay_step(),
            smoothing_ms: default_smoothing_ms(),
        }
    }
}

impl CompareConfig {
    /// Step sizes, clamped to the `MIN_*`/`MAX_*` bounds in [`defaults`].
    ///
    /// `nan` and `inf` (valid TOML floats) fall back to the default step.
    #[must_use]
    pub fn steps(&self) -> Steps {
        let keyboard = bounded_step(
            self.keyboard_step,
            DEFAULT_KEYBOARD_STEP,
            MIN_KEYBOARD_STEP,
            MAX_KEYBOARD_STEP,
        );
        let keyboard_large = bounded_step(
            self.keyboard_step_large,
            DEFAULT_KEYBOARD_STEP_LARGE,
            MIN_KEYBOARD_STEP,
            MAX_KEYBOARD_STEP,
        );
        let autoplay = bounded_step(
            self.autoplay_step,
            DEFAULT_AUTOPLAY_STEP,
            MIN_AUTOPLAY_STEP,
            MAX_AUTOPLAY_STEP,
        );

        Steps {
            keyboard,
            keyboard_large,
            autoplay,
        }
    }

    /// Transition duration, capped at [`MAX_SMOOTHING_MS`].
    #[must_use]
    pub fn smoothing(&self) -> Duration {
        let ms = self
            .smoothing_ms
            .unwrap_or(DEFAULT_SMOOTHING_MS)
            .min(MAX_SMOOTHING_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Comparison widget settings.
    #[serde(default)]
    pub compare: CompareConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_keyboard_step() -> Option<f32> {
    Some(DEFAULT_KEYBOARD_STEP)
}

fn default_keyboard_step_large() -> Option<f32> {
    Some(DEFAULT_KEYBOARD_STEP_LARGE)
}

fn default_autoplay_step() -> Option<f32> {
    Some(DEFAULT_AUTOPLAY_STEP)
}

fn default_smoothing_ms() -> Option<u64> {
    Some(DEFAULT_SMOOTHING_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn bounded_step(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    value
        .filter(|step| step.is_finite())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Returns the config file path with an optional override.
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
/// default config with a warning message key explaining what went wrong.
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
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
