// SPDX-License-Identifier: MPL-2.0
//! Toast configuration, loaded from and saved to a `toast.toml` file.
//!
//! # Configuration Sections
//!
//! - `[timing]` - Display durations per message family
//! - `[animation]` - Entrance/exit animation and tick rate
//! - `[layout]` - Placement margins and width cap
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, ToastConfig};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.timing.default_duration_secs = Some(3.0);
//! config.validate().expect("durations must be positive");
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toast.toml";
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// How long toasts stay on screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Duration for default and success toasts (seconds).
    #[serde(
        default = "default_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_secs: Option<f64>,

    /// Duration for warning toasts (seconds).
    #[serde(
        default = "default_warning_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub warning_duration_secs: Option<f64>,

    /// Duration for error toasts (seconds).
    #[serde(
        default = "default_error_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_duration_secs: Option<f64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration_secs(),
            warning_duration_secs: default_warning_duration_secs(),
            error_duration_secs: default_error_duration_secs(),
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        secs_or(self.default_duration_secs, DEFAULT_DURATION_SECS)
    }

    #[must_use]
    pub fn warning_duration(&self) -> Duration {
        secs_or(self.warning_duration_secs, DEFAULT_WARNING_DURATION_SECS)
    }

    #[must_use]
    pub fn error_duration(&self) -> Duration {
        secs_or(self.error_duration_secs, DEFAULT_ERROR_DURATION_SECS)
    }
}

/// Entrance/exit animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Entrance duration in milliseconds. Zero disables the entrance animation.
    #[serde(default = "default_entrance_ms", skip_serializing_if = "Option::is_none")]
    pub entrance_ms: Option<u64>,

    /// Exit duration in milliseconds. Zero disables the exit animation.
    #[serde(default = "default_exit_ms", skip_serializing_if = "Option::is_none")]
    pub exit_ms: Option<u64>,

    /// Vertical slide distance during entrance and exit.
    #[serde(
        default = "default_slide_distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub slide_distance: Option<f32>,

    /// Tick interval while a toast is active, in milliseconds.
    #[serde(
        default = "default_frame_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_interval_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            entrance_ms: default_entrance_ms(),
            exit_ms: default_exit_ms(),
            slide_distance: default_slide_distance(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl AnimationConfig {
    /// Configuration with both animations disabled.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            entrance_ms: Some(0),
            exit_ms: Some(0),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn entrance(&self) -> Duration {
        Duration::from_millis(
            self.entrance_ms
                .unwrap_or(DEFAULT_ENTRANCE_MS)
                .min(MAX_ANIMATION_MS),
        )
    }

    #[must_use]
    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms.unwrap_or(DEFAULT_EXIT_MS).min(MAX_ANIMATION_MS))
    }

    #[must_use]
    pub fn slide_distance(&self) -> f32 {
        self.slide_distance.unwrap_or(DEFAULT_SLIDE_DISTANCE)
    }

    /// Tick interval, never shorter than one millisecond.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(
            self.frame_interval_ms
                .unwrap_or(DEFAULT_FRAME_INTERVAL_MS)
                .max(1),
        )
    }
}

/// Placement of the toast inside its host surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(
        default = "default_horizontal_margin",
        skip_serializing_if = "Option::is_none"
    )]
    pub horizontal_margin: Option<f32>,

    #[serde(
        default = "default_bottom_margin",
        skip_serializing_if = "Option::is_none"
    )]
    pub bottom_margin: Option<f32>,

    #[serde(default = "default_max_width", skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_margin: default_horizontal_margin(),
            bottom_margin: default_bottom_margin(),
            max_width: default_max_width(),
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn horizontal_margin(&self) -> f32 {
        self.horizontal_margin.unwrap_or(DEFAULT_HORIZONTAL_MARGIN)
    }

    #[must_use]
    pub fn bottom_margin(&self) -> f32 {
        self.bottom_margin.unwrap_or(DEFAULT_BOTTOM_MARGIN)
    }

    #[must_use]
    pub fn max_width(&self) -> f32 {
        self.max_width.unwrap_or(DEFAULT_MAX_WIDTH)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Toast configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ToastConfig {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

impl ToastConfig {
    /// Checks that every configured value can be used.
    ///
    /// Durations and the tick interval must be strictly positive and display
    /// durations at most [`MAX_DURATION_SECS`]; animations are capped at
    /// [`MAX_ANIMATION_MS`]. Margins and the slide distance must not be
    /// negative.
    pub fn validate(&self) -> Result<()> {
        let durations = [
            ("timing.default_duration_secs", self.timing.default_duration_secs),
            ("timing.warning_duration_secs", self.timing.warning_duration_secs),
            ("timing.error_duration_secs", self.timing.error_duration_secs),
        ];
        for (name, value) in durations {
            if let Some(secs) = value {
                if secs.is_nan() || secs <= 0.0 || secs > MAX_DURATION_SECS {
                    return Err(Error::invalid(format!(
                        "{name} must be between 0 and {MAX_DURATION_SECS} seconds, got {secs}"
                    )));
                }
            }
        }

        if self.animation.frame_interval_ms == Some(0) {
            return Err(Error::invalid("animation.frame_interval_ms must be positive"));
        }

        let animations = [
            ("animation.entrance_ms", self.animation.entrance_ms),
            ("animation.exit_ms", self.animation.exit_ms),
        ];
        for (name, value) in animations {
            if let Some(ms) = value.filter(|ms| *ms > MAX_ANIMATION_MS) {
                return Err(Error::invalid(format!(
                    "{name} must be at most {MAX_ANIMATION_MS}, got {ms}"
                )));
            }
        }

        let lengths = [
            ("animation.slide_distance", self.animation.slide_distance),
            ("layout.horizontal_margin", self.layout.horizontal_margin),
            ("layout.bottom_margin", self.layout.bottom_margin),
        ];
        for (name, value) in lengths {
            if let Some(length) = value {
                if !length.is_finite() || length < 0.0 {
                    return Err(Error::invalid(format!(
                        "{name} must not be negative, got {length}"
                    )));
                }
            }
        }

        if let Some(max_width) = self.layout.max_width {
            if !max_width.is_finite() || max_width <= 0.0 {
                return Err(Error::invalid(format!(
                    "layout.max_width must be positive, got {max_width}"
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_secs() -> Option<f64> {
    Some(DEFAULT_DURATION_SECS)
}

fn default_warning_duration_secs() -> Option<f64> {
    Some(DEFAULT_WARNING_DURATION_SECS)
}

fn default_error_duration_secs() -> Option<f64> {
    Some(DEFAULT_ERROR_DURATION_SECS)
}

fn default_entrance_ms() -> Option<u64> {
    Some(DEFAULT_ENTRANCE_MS)
}

fn default_exit_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_MS)
}

fn default_slide_distance() -> Option<f32> {
    Some(DEFAULT_SLIDE_DISTANCE)
}

fn default_frame_interval_ms() -> Option<u64> {
    Some(DEFAULT_FRAME_INTERVAL_MS)
}

fn default_horizontal_margin() -> Option<f32> {
    Some(DEFAULT_HORIZONTAL_MARGIN)
}

fn default_bottom_margin() -> Option<f32> {
    Some(DEFAULT_BOTTOM_MARGIN)
}

fn default_max_width() -> Option<f32> {
    Some(DEFAULT_MAX_WIDTH)
}

/// Converts a configured number of seconds, ignoring unusable values.
fn secs_or(value: Option<f64>, fallback: f64) -> Duration {
    value
        .filter(|secs| *secs <= MAX_DURATION_SECS)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .filter(|duration| !duration.is_zero())
        .unwrap_or_else(|| Duration::from_secs_f64(fallback))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
///
/// Priority: explicit override, then `ICED_TOAST_CONFIG_DIR`, then the
/// platform config directory.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))
        .map(|mut path| {
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
pub fn load() -> (ToastConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (ToastConfig, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("falling back to default toast config: {err}");
                    return (ToastConfig::default(), Some(err.to_string()));
                }
            }
        }
    }
    (ToastConfig::default(), None)
}

/// Loads and validates configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    let config: ToastConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &ToastConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &ToastConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = ToastConfig::default();
        config.timing.warning_duration_secs = Some(6.0);
        config.animation.entrance_ms = Some(100);
        config.layout.bottom_margin = Some(48.0);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toast.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: ToastConfig = toml::from_str("[timing]\nerror_duration_secs = 8.0\n")
            .expect("partial config should parse");

        assert_eq!(config.timing.error_duration(), Duration::from_secs(8));
        assert_eq!(
            config.timing.default_duration(),
            Duration::from_secs_f64(DEFAULT_DURATION_SECS)
        );
        assert_eq!(config.animation, AnimationConfig::default());
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toast.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_from_path_rejects_non_positive_duration() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toast.toml");
        fs::write(&config_path, "[timing]\ndefault_duration_secs = 0.0\n")
            .expect("failed to write config");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[layout]\nmax_width = -5.0\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, ToastConfig::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, ToastConfig::default());
        assert!(warning.is_none());
    }

    #[test]
    fn validate_rejects_zero_frame_interval() {
        let mut config = ToastConfig::default();
        config.animation.frame_interval_ms = Some(0);
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn validate_rejects_negative_margin() {
        let mut config = ToastConfig::default();
        config.layout.horizontal_margin = Some(-1.0);
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn instant_animation_has_zero_durations() {
        let animation = AnimationConfig::instant();
        assert!(animation.entrance().is_zero());
        assert!(animation.exit().is_zero());
    }

    #[test]
    fn unusable_durations_fall_back_to_defaults() {
        let timing = TimingConfig {
            default_duration_secs: Some(-1.0),
            warning_duration_secs: Some(f64::NAN),
            error_duration_secs: Some(f64::INFINITY),
        };
        assert_eq!(
            timing.default_duration(),
            Duration::from_secs_f64(DEFAULT_DURATION_SECS)
        );
        assert_eq!(
            timing.warning_duration(),
            Duration::from_secs_f64(DEFAULT_WARNING_DURATION_SECS)
        );
        assert_eq!(
            timing.error_duration(),
            Duration::from_secs_f64(DEFAULT_ERROR_DURATION_SECS)
        );
    }

    #[test]
    fn huge_durations_fall_back_to_defaults() {
        let timing = TimingConfig {
            default_duration_secs: Some(1.0e300),
            warning_duration_secs: Some(MAX_DURATION_SECS * 2.0),
            error_duration_secs: Some(MAX_DURATION_SECS),
        };
        assert_eq!(
            timing.default_duration(),
            Duration::from_secs_f64(DEFAULT_DURATION_SECS)
        );
        assert_eq!(
            timing.warning_duration(),
            Duration::from_secs_f64(DEFAULT_WARNING_DURATION_SECS)
        );
        assert_eq!(
            timing.error_duration(),
            Duration::from_secs_f64(MAX_DURATION_SECS)
        );
    }

    #[test]
    fn validate_rejects_durations_beyond_limit() {
        for secs in [1.0e300, MAX_DURATION_SECS + 1.0, f64::INFINITY, f64::NAN] {
            let mut config = ToastConfig::default();
            config.timing.default_duration_secs = Some(secs);
            assert!(
                matches!(config.validate(), Err(Error::InvalidArgument(_))),
                "{secs} accepted"
            );
        }

        let mut config = ToastConfig::default();
        config.timing.error_duration_secs = Some(MAX_DURATION_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_from_path_rejects_overflowing_duration() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toast.toml");
        fs::write(&config_path, "[timing]\ndefault_duration_secs = 1e300\n")
            .expect("failed to write config");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn validate_rejects_overlong_animation() {
        let mut config = ToastConfig::default();
        config.animation.exit_ms = Some(MAX_ANIMATION_MS + 1);
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn animation_accessors_are_clamped() {
        let animation = AnimationConfig {
            entrance_ms: Some(u64::MAX),
            exit_ms: Some(u64::MAX),
            frame_interval_ms: Some(0),
            ..AnimationConfig::default()
        };
        assert_eq!(animation.entrance(), Duration::from_millis(MAX_ANIMATION_MS));
        assert_eq!(animation.exit(), Duration::from_millis(MAX_ANIMATION_MS));
        assert_eq!(animation.frame_interval(), Duration::from_millis(1));
    }
}
