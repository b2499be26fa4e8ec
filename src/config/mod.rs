// SPDX-License-Identifier: MPL-2.0
//! Host configuration stored in a `settings.toml` file.
//!
//! Sliders themselves are configured by the page's `data-*` attributes (see
//! [`crate::slider::options`]). This file only tunes the host that runs them.
//!
//! # Configuration Sections
//!
//! - `[window]` - Initial host window size
//! - `[runtime]` - Resize debounce and tick cadence
//! - `[logging]` - Default tracing filter
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to `load_with_override()`/`save_with_override()`
//! 2. `--config-dir` CLI argument, registered via [`init_cli_override`]
//! 3. `DANNY_SLIDER_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use danny_slider::config;
//!
//! let (mut config, _warning) = config::load();
//! config.runtime.resize_debounce_ms = Some(400);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "DannySlider";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "DANNY_SLIDER_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

// =============================================================================
// Section Structs
// =============================================================================

/// Initial host window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default = "default_window_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Timing of the event loop that drives autoplay and resize handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    /// Quiet period before a resize triggers a layout recomputation.
    #[serde(
        default = "default_resize_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub resize_debounce_ms: Option<u64>,

    /// Host tick cadence in milliseconds.
    #[serde(default = "default_tick_ms", skip_serializing_if = "Option::is_none")]
    pub tick_ms: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: default_resize_debounce_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl RuntimeConfig {
    /// Resize debounce, clamped to the supported range.
    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        let ms = self
            .resize_debounce_ms
            .unwrap_or(DEFAULT_RESIZE_DEBOUNCE_MS)
            .clamp(MIN_RESIZE_DEBOUNCE_MS, MAX_RESIZE_DEBOUNCE_MS);
        Duration::from_millis(ms)
    }

    /// Tick cadence, clamped to the supported range.
    #[must_use]
    pub fn tick(&self) -> Duration {
        let ms = self
            .tick_ms
            .unwrap_or(DEFAULT_TICK_MS)
            .clamp(MIN_TICK_MS, MAX_TICK_MS);
        Duration::from_millis(ms)
    }
}

/// Logging defaults. `RUST_LOG` always wins over this section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl LoggingConfig {
    #[must_use]
    pub fn filter_or_default(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_window_width() -> Option<f32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<f32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn default_resize_debounce_ms() -> Option<u64> {
    Some(DEFAULT_RESIZE_DEBOUNCE_MS)
}

fn default_tick_ms() -> Option<u64> {
    Some(DEFAULT_TICK_MS)
}

// =============================================================================
// Path Functions
// =============================================================================

/// Registers the `--config-dir` CLI argument.
///
/// Returns `false` if an override was already registered; the first one stays.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the config directory, honoring the resolution order above.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
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
    if let Some(path) = config_path_with_override(base_dir) {
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
