// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Thumbnail window and transition timing
//! - `[gesture]` - Swipe recognition thresholds
//! - `[media]` - Image cache size
//!
//! Every value is optional; missing or out-of-range values fall back to (or
//! are clamped into) the ranges in [`defaults`].
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `INTERIOR_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use interior_gallery::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.gallery.visible_thumbnails = Some(7);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::{CacheCapacity, CloseDelay, CrossFadeDelay, VisibleThumbnails};
use crate::error::{Error, Result};
use crate::ui::gallery::component::Settings;
use crate::ui::gallery::subcomponents::gesture::GestureConfig;
use crate::ui::theming::ThemeMode;
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
    /// UI language code (e.g., "en-US", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery modal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of thumbnails visible in the strip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_thumbnails: Option<usize>,

    /// Cross-fade duration between two images (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_fade_ms: Option<u64>,

    /// Exit transition duration (milliseconds). Zero closes immediately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_delay_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            visible_thumbnails: Some(DEFAULT_VISIBLE_THUMBNAILS),
            cross_fade_ms: Some(DEFAULT_CROSS_FADE_MS),
            close_delay_ms: Some(DEFAULT_CLOSE_DELAY_MS),
        }
    }
}

/// Touch gesture thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GestureSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_distance_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_lock_ratio: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_lock_ratio: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_ratio: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flick_window_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flick_distance_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_distance_px: Option<f32>,

    /// Pixels per millisecond.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_velocity: Option<f32>,
}

/// Media loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaConfig {
    /// Number of decoded images kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_entries: Option<usize>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cache_entries: Some(DEFAULT_CACHE_ENTRIES),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub gesture: GestureSection,

    #[serde(default)]
    pub media: MediaConfig,
}

fn clamp_or(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

impl Config {
    /// Gesture thresholds with every value clamped into its valid range.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        let g = &self.gesture;
        GestureConfig {
            lock_distance: clamp_or(
                g.lock_distance_px,
                DEFAULT_LOCK_DISTANCE_PX,
                MIN_LOCK_DISTANCE_PX,
                MAX_LOCK_DISTANCE_PX,
            ),
            horizontal_lock_ratio: clamp_or(
                g.horizontal_lock_ratio,
                DEFAULT_HORIZONTAL_LOCK_RATIO,
                MIN_AXIS_RATIO,
                MAX_AXIS_RATIO,
            ),
            vertical_lock_ratio: clamp_or(
                g.vertical_lock_ratio,
                DEFAULT_VERTICAL_LOCK_RATIO,
                MIN_AXIS_RATIO,
                MAX_AXIS_RATIO,
            ),
            release_ratio: clamp_or(
                g.release_ratio,
                DEFAULT_RELEASE_RATIO,
                MIN_AXIS_RATIO,
                MAX_AXIS_RATIO,
            ),
            flick_window: Duration::from_millis(
                g.flick_window_ms
                    .unwrap_or(DEFAULT_FLICK_WINDOW_MS)
                    .clamp(MIN_FLICK_WINDOW_MS, MAX_FLICK_WINDOW_MS),
            ),
            flick_distance: clamp_or(
                g.flick_distance_px,
                DEFAULT_FLICK_DISTANCE_PX,
                MIN_SWIPE_DISTANCE_PX,
                MAX_SWIPE_DISTANCE_PX,
            ),
            drag_distance: clamp_or(
                g.drag_distance_px,
                DEFAULT_DRAG_DISTANCE_PX,
                MIN_SWIPE_DISTANCE_PX,
                MAX_SWIPE_DISTANCE_PX,
            ),
            min_velocity: clamp_or(g.min_velocity, DEFAULT_MIN_VELOCITY, MIN_VELOCITY, MAX_VELOCITY),
        }
    }

    /// Gallery controller settings derived from the `[gallery]` and `[gesture]` sections.
    #[must_use]
    pub fn gallery_settings(&self) -> Settings {
        Settings {
            visible_thumbnails: VisibleThumbnails::new(
                self.gallery
                    .visible_thumbnails
                    .unwrap_or(DEFAULT_VISIBLE_THUMBNAILS),
            ),
            cross_fade_delay: CrossFadeDelay::from_millis(
                self.gallery.cross_fade_ms.unwrap_or(DEFAULT_CROSS_FADE_MS),
            ),
            close_delay: CloseDelay::from_millis(
                self.gallery
                    .close_delay_ms
                    .unwrap_or(DEFAULT_CLOSE_DELAY_MS),
            ),
            gesture: self.gesture_config(),
        }
    }

    #[must_use]
    pub fn cache_capacity(&self) -> CacheCapacity {
        CacheCapacity::new(self.media.cache_entries.unwrap_or(DEFAULT_CACHE_ENTRIES))
    }
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    eprintln!("[config] {}: {err}", path.display());
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ru".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                visible_thumbnails: Some(7),
                cross_fade_ms: Some(250),
                close_delay_ms: Some(0),
            },
            gesture: GestureSection {
                flick_distance_px: Some(18.0),
                ..GestureSection::default()
            },
            media: MediaConfig {
                cache_entries: Some(128),
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

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"ru\"\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("ru"));
        assert_eq!(loaded.gallery, GalleryConfig::default());
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn default_config_has_expected_values() {
        let settings = Config::default().gallery_settings();
        assert_eq!(settings.visible_thumbnails.value(), 5);
        assert_eq!(settings.cross_fade_delay.millis(), 180);
        assert_eq!(settings.close_delay.millis(), 360);
        assert_eq!(settings.gesture, GestureConfig::default());
        assert_eq!(Config::default().cache_capacity().value(), 64);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            gallery: GalleryConfig {
                visible_thumbnails: Some(0),
                cross_fade_ms: Some(60_000),
                close_delay_ms: None,
            },
            gesture: GestureSection {
                lock_distance_px: Some(-3.0),
                min_velocity: Some(f32::NAN),
                flick_window_ms: Some(5),
                ..GestureSection::default()
            },
            media: MediaConfig {
                cache_entries: Some(1),
            },
            ..Config::default()
        };

        let settings = config.gallery_settings();
        assert_eq!(settings.visible_thumbnails.value(), 1);
        assert_eq!(settings.cross_fade_delay.millis(), 2000);
        assert_eq!(settings.close_delay.millis(), DEFAULT_CLOSE_DELAY_MS);
        assert_relative_eq!(settings.gesture.lock_distance, MIN_LOCK_DISTANCE_PX);
        assert_relative_eq!(settings.gesture.min_velocity, DEFAULT_MIN_VELOCITY);
        assert_eq!(
            settings.gesture.flick_window,
            Duration::from_millis(MIN_FLICK_WINDOW_MS)
        );
        assert_eq!(config.cache_capacity().value(), 8);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save");
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn corrupt_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
