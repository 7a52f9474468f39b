// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Tooltip Style
//!
//! This module provides the visual description of a tooltip bubble.
//!
//! ## Overview
//!
//! - **[TooltipStyle]**: corner radius, border width and colors of the bubble
//! - **[Padding]**: space between the bubble border and its content
//!
//! Every field has a default, so a style table only needs to name the values
//! it changes.
//!
//! ## Usage Examples
//!
//! ```rust
//! use bubbletip_theme::style::TooltipStyle;
//!
//! let style = TooltipStyle::from_toml(r##"
//! border_width = 1.0
//! background_color = "#202020"
//!
//! [padding]
//! left = 12.0
//! right = 12.0
//! "##).unwrap();
//!
//! assert_eq!(style.border_width, 1.0);
//! assert_eq!(style.padding.top, 8.0);
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! border_radius = 8.0
//! border_width = 2.0
//! border_color = "#1f1f1f"
//! background_color = "#ffffffee"
//!
//! [padding]
//! left = 8.0
//! right = 8.0
//! top = 8.0
//! bottom = 8.0
//! ```

use serde::{Deserialize, Serialize};
use vello::kurbo::{Insets, Size};
use vello::peniko::Color;

use crate::error::ThemeResult;

const DEFAULT_BORDER_RADIUS: f64 = 8.0;
const DEFAULT_BORDER_WIDTH: f64 = 2.0;
const DEFAULT_PADDING: f64 = 8.0;

/// Space between the bubble border and the tooltip content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Left padding.
    pub left: f64,
    /// Right padding.
    pub right: f64,
    /// Top padding.
    pub top: f64,
    /// Bottom padding.
    pub bottom: f64,
}

impl Padding {
    /// The same padding on every edge.
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Grow a content size by this padding.
    pub fn expand(&self, size: Size) -> Size {
        Size::new(size.width + self.horizontal(), size.height + self.vertical())
    }

    /// The padding as kurbo insets, for shrinking a rect to its content area.
    pub fn to_insets(&self) -> Insets {
        Insets::new(self.left, self.top, self.right, self.bottom)
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(DEFAULT_PADDING)
    }
}

/// The look of a tooltip bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    /// Corner radius of the bubble.
    pub border_radius: f64,
    /// Width of the border stroke. Also drawn along the arrow.
    pub border_width: f64,
    /// Border color.
    #[serde(with = "crate::serde_color")]
    pub border_color: Color,
    /// Fill color of the bubble and arrow.
    #[serde(with = "crate::serde_color")]
    pub background_color: Color,
    /// Padding around the content.
    pub padding: Padding,
}

impl TooltipStyle {
    /// Parse a style from a TOML table. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> ThemeResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Set the corner radius.
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = radius;
        self
    }

    /// Set the border width.
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    /// Set the border color.
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the content padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            border_radius: DEFAULT_BORDER_RADIUS,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: Color::from_rgb8(0x1f, 0x1f, 0x1f),
            background_color: Color::from_rgb8(0xff, 0xff, 0xff),
            padding: Padding::default(),
        }
    }
}
