// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, stored in a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[catalog]` - Project list location and assets location
//! - `[slider]` - Auto-advance interval and swipe threshold
//! - `[resume]` - CV asset and the file name suggested when saving it
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_FOLIO_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("slides change every {:?}", config.slide_interval());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::catalog::{AssetRoot, DataSource};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Where the project list and its assets come from.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path or URL of the JSON project list.
    #[serde(default = "default_catalog_source")]
    pub source: String,

    /// Directory or base URL for relative image paths and the CV file.
    #[serde(default = "default_assets")]
    pub assets: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
            assets: default_assets(),
        }
    }
}

/// Image slider behavior.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Auto-advance interval in milliseconds.
    #[serde(default = "default_slide_interval_ms")]
    pub interval_ms: Option<u64>,

    /// Horizontal displacement a swipe must exceed, in pixels.
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_slide_interval_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
        }
    }
}

/// The downloadable CV.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResumeConfig {
    /// CV asset, relative to the assets location (or an absolute URL).
    #[serde(default = "default_resume_file")]
    pub file: String,

    /// File name suggested by the save dialog.
    #[serde(default = "default_resume_file_name")]
    pub file_name: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            file: default_resume_file(),
            file_name: default_resume_file_name(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub slider: SliderConfig,

    #[serde(default)]
    pub resume: ResumeConfig,
}

impl Config {
    #[must_use]
    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.catalog.source)
    }

    #[must_use]
    pub fn asset_root(&self) -> AssetRoot {
        AssetRoot::parse(&self.catalog.assets)
    }

    /// Auto-advance interval, clamped to the supported range.
    #[must_use]
    pub fn slide_interval(&self) -> Duration {
        let ms = self
            .slider
            .interval_ms
            .unwrap_or(DEFAULT_SLIDE_INTERVAL_MS)
            .clamp(MIN_SLIDE_INTERVAL_MS, MAX_SLIDE_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Swipe threshold, clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        let px = self
            .slider
            .swipe_threshold_px
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX);
        if px.is_finite() {
            px.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
        } else {
            DEFAULT_SWIPE_THRESHOLD_PX
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_catalog_source() -> String {
    DEFAULT_CATALOG_SOURCE.to_string()
}

fn default_assets() -> String {
    DEFAULT_ASSETS_DIR.to_string()
}

fn default_slide_interval_ms() -> Option<u64> {
    Some(DEFAULT_SLIDE_INTERVAL_MS)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_resume_file() -> String {
    DEFAULT_RESUME_FILE.to_string()
}

fn default_resume_file_name() -> String {
    DEFAULT_RESUME_FILE_NAME.to_string()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
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
/// the default config with a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
                    return (
                        Config::default(),
                        Some(format!(
                            "Settings could not be read, defaults are used ({})",
                            path.display()
                        )),
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
// Tests
// =============================================================================
