//! Application settings
//!
//! Settings are stored as TOML. Every section and field has a default, so
//! a missing file, a missing section and a partial section are all valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::partition::{
    Color, ColorPool, ColorSource, DEFAULT_PALETTE, DEFAULT_SIZE, LayoutOptions, RandomColors,
    Rect, SnapPolicy,
};
use crate::partition::gutter::{DEFAULT_SNAP_POINTS, DEFAULT_SNAP_THRESHOLD};
use crate::tracing::TracingLevel;

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logging configuration
    pub logging: LoggingSettings,
    /// Layout geometry and drag behavior
    pub layout: LayoutSettings,
    /// Colors for new partitions
    pub colors: ColorSettings,
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` if the values fail validation.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes settings to TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that the values are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        if !layout.default_size.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "layout.default_size must be finite, got {}",
                layout.default_size
            )));
        }
        // Hit testing needs a gutter with some thickness to press on
        if !(layout.gutter.is_finite() && layout.gutter > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "layout.gutter must be positive, got {}",
                layout.gutter
            )));
        }
        if !(layout.snap_threshold.is_finite() && layout.snap_threshold >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "layout.snap_threshold must be zero or positive, got {}",
                layout.snap_threshold
            )));
        }
        if layout.snap_points.iter().any(|p| !p.is_finite()) {
            return Err(ConfigError::Invalid(
                "layout.snap_points must be finite numbers".to_string(),
            ));
        }
        if layout.width == 0 || layout.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "layout viewport must be non-empty, got {}x{}",
                layout.width, layout.height
            )));
        }
        if self.colors.mode == ColorMode::Palette && self.colors.palette.is_empty() {
            return Err(ConfigError::Invalid(
                "colors.palette must not be empty in palette mode".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level written
    pub level: TracingLevel,
    /// Log file; logs go to stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: TracingLevel::Warn,
            file: None,
        }
    }
}

/// Layout section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Size share of a first child that was never resized
    pub default_size: f64,
    /// Gutter thickness in viewport cells
    pub gutter: f64,
    /// Sizes the divider snaps to while dragging
    pub snap_points: Vec<f64>,
    /// Snap distance in percent
    pub snap_threshold: f64,
    /// Viewport width in cells
    pub width: u16,
    /// Viewport height in cells
    pub height: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            gutter: 1.0,
            snap_points: DEFAULT_SNAP_POINTS.to_vec(),
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            width: 80,
            height: 24,
        }
    }
}

impl LayoutSettings {
    /// Geometry options derived from these settings.
    #[must_use]
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            default_size: self.default_size,
            gutter: self.gutter,
        }
    }

    /// Snap policy derived from these settings.
    #[must_use]
    pub fn snap_policy(&self) -> SnapPolicy {
        SnapPolicy::new(self.snap_points.clone(), self.snap_threshold)
    }

    /// The viewport rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// How new partitions get their color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Cycle through the configured palette
    #[default]
    Palette,
    /// Draw random colors
    Random,
}

/// Colors section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    /// Palette or random colors
    pub mode: ColorMode,
    /// Seed for random mode; the OS seeds the generator when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Palette for palette mode
    pub palette: Vec<Color>,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            mode: ColorMode::Palette,
            seed: None,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl ColorSettings {
    /// Builds the color source these settings describe.
    #[must_use]
    pub fn build_source(&self) -> Box<dyn ColorSource> {
        match (self.mode, self.seed) {
            (ColorMode::Palette, _) => Box::new(ColorPool::with_palette(self.palette.clone())),
            (ColorMode::Random, Some(seed)) => Box::new(RandomColors::seeded(seed)),
            (ColorMode::Random, None) => Box::new(RandomColors::new()),
        }
    }
}
