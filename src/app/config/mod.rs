// SPDX-License-Identifier: MPL-2.0
//! This module reads the application's startup defaults from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - Icon size, gallery background and vector render strategy
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` or `load_with_override()` with an explicit path
//! 2. Set `SVG_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! The file is only ever read. Settings changed in the UI last for the
//! session.
//!
//! # Examples
//!
//! ```no_run
//! use svg_gallery::app::config;
//!
//! // Load configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let settings = config.gallery_settings();
//! assert!(settings.icon_size.value() >= 16);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{BackgroundColor, IconSize};
use crate::error::{Error, Result};
use crate::gallery::GallerySettings;
use crate::media::RenderStrategy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Display settings applied when the gallery starts.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Vector icon edge length in pixels, clamped to 16..=128.
    #[serde(default = "default_icon_size")]
    pub icon_size: Option<u32>,

    /// Gallery background as `[r, g, b]`.
    #[serde(default = "default_background")]
    pub background: Option<[u8; 3]>,

    /// How SVG files are rasterized.
    #[serde(default)]
    pub render_strategy: Option<RenderStrategy>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            icon_size: default_icon_size(),
            background: default_background(),
            render_strategy: Some(RenderStrategy::default()),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Startup settings for the gallery model.
    #[must_use]
    pub fn gallery_settings(&self) -> GallerySettings {
        let display = &self.display;
        GallerySettings {
            icon_size: IconSize::new(display.icon_size.unwrap_or(DEFAULT_ICON_SIZE)),
            background: BackgroundColor::from(display.background.unwrap_or(DEFAULT_BACKGROUND)),
            strategy: display.render_strategy.unwrap_or_default(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_icon_size() -> Option<u32> {
    Some(DEFAULT_ICON_SIZE)
}

fn default_background() -> Option<[u8; 3]> {
    Some(DEFAULT_BACKGROUND)
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
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error. If the file exists but cannot be used, returns the default config
/// and an [`Error::Config`] describing why.
pub fn load() -> (Config, Option<Error>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Error>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring configuration");
                    let warning = Error::Config(format!(
                        "could not read {}, using defaults ({err})",
                        path.display()
                    ));
                    return (Config::default(), Some(warning));
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
