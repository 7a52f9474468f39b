// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Tooltip Configuration
//!
//! One plain struct, [TooltipConfig], describes everything about a tooltip:
//! where it goes, how big it is, how it looks and how it moves.
//!
//! ## Overview
//!
//! - **[TooltipConfig]**: the full configuration, with defaults per side
//! - **[PlacementConfig]**: the subset the positioner reads
//! - **[AnimationConfig]**: the bounce cue
//! - **[FadeConfig]**: the fade-in when the tooltip appears
//!
//! ## Sources
//!
//! - Programmatic: [TooltipConfig::for_side] and the `with_*` builders
//! - TOML: [TooltipConfig::from_toml] and [TooltipConfig::from_file]
//! - Environment: [TooltipConfig::from_env_or_default] reads the file named by
//!   `BUBBLETIP_CONFIG`
//!
//! ## Configuration File Format
//!
//! ```toml
//! side = "bottom"
//! margin = 8.0
//! gutter = 8.0
//! width = "auto"
//! height = 32.0
//! show_arrow = true
//! arrow_width = 12.0
//! arrow_height = 6.0
//!
//! [style]
//! border_width = 2.0
//! background_color = "#ffffff"
//!
//! [animation]
//! enabled = true
//! offset = 10.0
//! time = 1.0
//! easing = "ease_in_out"
//!
//! [fade_in]
//! enabled = true
//! duration_ms = 200
//! ```

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use bubbletip_theme::style::TooltipStyle;
use serde::{Deserialize, Serialize};
use vello::kurbo::Size;

use crate::animation::easing::Easing;
use crate::error::{ConfigError, ConfigResult};
use crate::geometry::Dimension;
use crate::side::TooltipSide;

/// Environment variable holding the path of a tooltip config file.
pub const CONFIG_ENV_VAR: &str = "BUBBLETIP_CONFIG";

/// Share of the animation time the bubble stays displaced.
const BOUNCE_FRACTION: f64 = 0.1;

/// Shortest accepted [AnimationConfig::time], in seconds.
pub const MIN_ANIMATION_TIME: f64 = 0.01;

/// Longest accepted [AnimationConfig::time], in seconds.
pub const MAX_ANIMATION_TIME: f64 = 3600.0;

/// Settings for the bounce cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Whether the bubble bounces while visible.
    pub enabled: bool,
    /// How far the bubble moves towards its anchor.
    pub offset: f64,
    /// Seconds spent at rest between two bounces.
    pub time: f64,
    /// Curve used to move in and out of the bounce.
    pub easing: Easing,
}

impl AnimationConfig {
    /// How long the bubble rests before bouncing.
    pub fn rest_duration(&self) -> Duration {
        seconds(self.time)
    }

    /// How long the bubble stays displaced.
    pub fn bounce_duration(&self) -> Duration {
        seconds(self.time * BOUNCE_FRACTION)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            offset: 10.0,
            time: 1.0,
            easing: Easing::EaseInOut,
        }
    }
}

/// Settings for the fade-in transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Whether the tooltip fades in.
    pub enabled: bool,
    /// Fade duration in milliseconds.
    pub duration_ms: u64,
}

impl FadeConfig {
    /// Create a new fade configuration.
    pub fn new(enabled: bool, duration_ms: u64) -> Self {
        Self {
            enabled,
            duration_ms,
        }
    }

    /// Get the fade duration.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 200,
        }
    }
}

/// The inputs of [place](crate::positioner::place) that come from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    /// Edge of the anchor the bubble sits against.
    pub side: TooltipSide,
    /// Gap between anchor and bubble.
    pub margin: f64,
    /// Minimum distance between the bubble and the viewport edges.
    pub gutter: f64,
    /// Border width of the bubble.
    pub border_width: f64,
    /// Height of the arrow.
    pub arrow_height: f64,
    /// Whether an arrow is drawn.
    pub show_arrow: bool,
    /// Width override.
    pub width: Dimension,
    /// Height override.
    pub height: Dimension,
}

impl PlacementConfig {
    /// Arrow height if an arrow is drawn on this side, zero otherwise.
    pub fn effective_arrow_height(&self) -> f64 {
        if self.arrow_visible() {
            self.arrow_height
        } else {
            0.0
        }
    }

    /// Whether the arrow is both requested and supported by the side.
    pub fn arrow_visible(&self) -> bool {
        self.show_arrow && self.side.shows_arrow()
    }

    /// Apply the fixed width/height overrides to a measured size.
    pub fn resolve_content_size(&self, measured: Size) -> Size {
        Size::new(
            self.width.resolve(measured.width),
            self.height.resolve(measured.height),
        )
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        TooltipConfig::default().placement()
    }
}

/// Full configuration of a tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Edge of the anchor the bubble sits against.
    pub side: TooltipSide,
    /// Gap between anchor and bubble.
    pub margin: f64,
    /// Minimum distance between the bubble and the viewport edges.
    pub gutter: f64,
    /// Stacking order of the overlay relative to other overlays.
    pub z_index: f64,
    /// Bubble width.
    pub width: Dimension,
    /// Bubble height.
    pub height: Dimension,
    /// Bubble look.
    pub style: TooltipStyle,
    /// Whether an arrow points at the anchor.
    pub show_arrow: bool,
    /// Arrow base width.
    pub arrow_width: f64,
    /// Arrow height.
    pub arrow_height: f64,
    /// Bounce cue.
    pub animation: AnimationConfig,
    /// Fade-in transition.
    pub fade_in: FadeConfig,
}

impl TooltipConfig {
    /// Defaults for a tooltip on the given side.
    pub fn for_side(side: TooltipSide) -> Self {
        Self {
            side,
            margin: 8.0,
            gutter: 8.0,
            z_index: 10_000.0,
            width: Dimension::Auto,
            height: Dimension::Auto,
            style: TooltipStyle::default(),
            show_arrow: true,
            arrow_width: 12.0,
            arrow_height: 6.0,
            animation: AnimationConfig::default(),
            fade_in: FadeConfig::default(),
        }
    }

    /// Parse and validate a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded tooltip config from {:?}", path);
        Ok(config)
    }

    /// Load the file named by `BUBBLETIP_CONFIG`, or fall back to the defaults.
    pub fn from_env_or_default() -> Self {
        let Ok(path) = env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring tooltip config {:?}: {}", path, e);
                Self::default()
            },
        }
    }

    /// Reject lengths and durations a tooltip cannot be drawn with.
    pub fn validate(&self) -> ConfigResult<()> {
        let lengths = [
            ("margin", self.margin),
            ("gutter", self.gutter),
            ("arrow_width", self.arrow_width),
            ("arrow_height", self.arrow_height),
            ("style.border_radius", self.style.border_radius),
            ("style.border_width", self.style.border_width),
            ("style.padding.left", self.style.padding.left),
            ("style.padding.right", self.style.padding.right),
            ("style.padding.top", self.style.padding.top),
            ("style.padding.bottom", self.style.padding.bottom),
        ];
        for (field, value) in lengths {
            check_length(field, value)?;
        }

        if let Dimension::Fixed(width) = self.width {
            check_length("width", width)?;
        }
        if let Dimension::Fixed(height) = self.height {
            check_length("height", height)?;
        }

        if !self.z_index.is_finite() {
            return Err(ConfigError::invalid_value("z_index", self.z_index));
        }
        if !self.animation.offset.is_finite() {
            return Err(ConfigError::invalid_value("animation.offset", self.animation.offset));
        }
        let time = self.animation.time;
        if self.animation.enabled && !(MIN_ANIMATION_TIME..=MAX_ANIMATION_TIME).contains(&time) {
            return Err(ConfigError::invalid_value("animation.time", time));
        }

        Ok(())
    }

    /// The positioner's view of this configuration.
    pub fn placement(&self) -> PlacementConfig {
        PlacementConfig {
            side: self.side,
            margin: self.margin,
            gutter: self.gutter,
            border_width: self.style.border_width,
            arrow_height: self.arrow_height,
            show_arrow: self.show_arrow,
            width: self.width,
            height: self.height,
        }
    }

    /// Set the side.
    pub fn with_side(mut self, side: TooltipSide) -> Self {
        self.side = side;
        self
    }

    /// Set the anchor margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the viewport gutter.
    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    /// Fix the bubble width and/or height.
    pub fn with_size(mut self, width: Dimension, height: Dimension) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the bubble style.
    pub fn with_style(mut self, style: TooltipStyle) -> Self {
        self.style = style;
        self
    }

    /// Show or hide the arrow.
    pub fn with_arrow(mut self, show_arrow: bool) -> Self {
        self.show_arrow = show_arrow;
        self
    }

    /// Set the bounce cue.
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Set the fade-in transition.
    pub fn with_fade_in(mut self, fade_in: FadeConfig) -> Self {
        self.fade_in = fade_in;
        self
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self::for_side(TooltipSide::default())
    }
}

/// Non-negative seconds, capped at [MAX_ANIMATION_TIME]. NaN maps to zero.
fn seconds(value: f64) -> Duration {
    Duration::from_secs_f64(value.max(0.0).min(MAX_ANIMATION_TIME))
}

fn check_length(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid_value(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_side() {
        let top = TooltipConfig::for_side(TooltipSide::Top);
        let bottom = TooltipConfig::for_side(TooltipSide::Bottom);
        assert_eq!(top.side, TooltipSide::Top);
        assert_eq!(bottom.side, TooltipSide::Bottom);
        assert_eq!(top.margin, bottom.margin);
        assert!(top.validate().is_ok());
        assert!(bottom.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_over_defaults() {
        let config = TooltipConfig::from_toml(
            r##"
            side = "bottom"
            width = 120.0

            [style]
            border_width = 1.0

            [animation]
            enabled = false
            "##,
        )
        .unwrap();

        assert_eq!(config.side, TooltipSide::Bottom);
        assert_eq!(config.width, Dimension::Fixed(120.0));
        assert_eq!(config.height, Dimension::Auto);
        assert_eq!(config.style.border_width, 1.0);
        assert!(!config.animation.enabled);
        assert_eq!(config.animation.time, AnimationConfig::default().time);
        assert_eq!(config.gutter, 8.0);
    }

    #[test]
    fn test_negative_margin_rejected() {
        let err = TooltipConfig::from_toml("margin = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "margin", .. }));
    }

    #[test]
    fn test_zero_animation_time_only_rejected_when_enabled() {
        let mut config = TooltipConfig::default();
        config.animation.time = 0.0;
        assert!(config.validate().is_err());

        config.animation.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_animation_time_bounds() {
        let err = TooltipConfig::from_toml("[animation]\ntime = 1e20").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "animation.time", .. }));

        let err = TooltipConfig::from_toml("[animation]\ntime = 1e-8").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "animation.time", .. }));

        assert!(TooltipConfig::from_toml("[animation]\ntime = 0.01").is_ok());
        assert!(TooltipConfig::from_toml("[animation]\ntime = 3600.0").is_ok());
    }

    #[test]
    fn test_durations_never_panic() {
        let mut animation = AnimationConfig {
            time: 1e20,
            ..AnimationConfig::default()
        };
        assert_eq!(animation.rest_duration(), Duration::from_secs(3600));

        animation.time = f64::NAN;
        assert_eq!(animation.rest_duration(), Duration::ZERO);
        assert_eq!(animation.bounce_duration(), Duration::ZERO);
    }

    #[test]
    fn test_missing_file() {
        let err = TooltipConfig::from_file("/nonexistent/bubbletip.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_from_file() {
        let path = env::temp_dir().join(format!("bubbletip-config-{}.toml", std::process::id()));
        fs::write(&path, "side = \"bottom\"\ngutter = 12.0\n").unwrap();

        let config = TooltipConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.side, TooltipSide::Bottom);
        assert_eq!(config.gutter, 12.0);
    }

    #[test]
    fn test_bounce_is_a_tenth_of_rest() {
        let animation = AnimationConfig {
            time: 2.0,
            ..AnimationConfig::default()
        };
        assert_eq!(animation.rest_duration(), Duration::from_secs(2));
        assert_eq!(animation.bounce_duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_placement_projection() {
        let config = TooltipConfig::default().with_arrow(false).with_gutter(3.0);
        let placement = config.placement();
        assert_eq!(placement.gutter, 3.0);
        assert_eq!(placement.effective_arrow_height(), 0.0);
        assert_eq!(placement.border_width, config.style.border_width);
        assert!(!placement.arrow_visible());
    }
}
