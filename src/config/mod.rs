// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[player]` - Controls auto-hide delay, skip step, initial volume
//! - `[catalog]` - Location of the video catalog file
//! - `[diagnostics]` - Size of the player action buffer
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `CODECAST_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use codecast::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.player.skip_step_secs = Some(5.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::video::{ControlsHideDelay, SkipStep, Volume};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Inactivity delay before controls hide while playing (milliseconds).
    #[serde(
        default = "default_controls_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub controls_hide_delay_ms: Option<u64>,

    /// Skip buttons / arrow keys step (seconds).
    #[serde(
        default = "default_skip_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_step_secs: Option<f64>,

    /// Volume a new player starts with (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub default_volume: Option<f64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            controls_hide_delay_ms: default_controls_hide_delay_ms(),
            skip_step_secs: default_skip_step_secs(),
            default_volume: default_volume(),
        }
    }
}

impl PlayerConfig {
    /// Hide delay, clamped to its valid range.
    #[must_use]
    pub fn hide_delay(&self) -> ControlsHideDelay {
        self.controls_hide_delay_ms
            .map(ControlsHideDelay::from_millis)
            .unwrap_or_default()
    }

    /// Skip step, clamped to its valid range.
    #[must_use]
    pub fn skip_step(&self) -> SkipStep {
        self.skip_step_secs.map(SkipStep::new).unwrap_or_default()
    }

    /// Initial volume, clamped to `[0, 1]`.
    #[must_use]
    pub fn initial_volume(&self) -> Volume {
        self.default_volume.map(Volume::new).unwrap_or_default()
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    /// Path of the TOML catalog. Relative paths resolve against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of player actions kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    /// Buffer capacity, clamped to its valid range.
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        self.buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Playback settings.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Diagnostics settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_controls_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_CONTROLS_HIDE_DELAY_MS)
}

fn default_skip_step_secs() -> Option<f64> {
    Some(DEFAULT_SKIP_STEP_SECS)
}

fn default_volume() -> Option<f64> {
    Some(DEFAULT_VOLUME)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with a warning key explaining what went wrong.
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
                    log::warn!("ignoring unreadable config {}: {}", path.display(), err);
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
