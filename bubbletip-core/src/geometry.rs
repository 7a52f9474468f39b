// SPDX-License-Identifier: MIT OR Apache-2.0
//! Geometry types shared by the positioner, the renderer and the tooltip controller.

use serde::{Deserialize, Serialize};
use vello::kurbo::{Point, Rect, Size};

/// A width or height that is either measured from the content or fixed by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "DimensionRepr", into = "DimensionRepr")]
pub enum Dimension {
    /// Use the natural size reported by the measurement pass.
    #[default]
    Auto,
    /// Use this exact length.
    Fixed(f64),
}

impl Dimension {
    /// Pick the fixed length, or fall back to the measured one.
    pub fn resolve(self, measured: f64) -> f64 {
        match self {
            Dimension::Auto => measured,
            Dimension::Fixed(value) => value,
        }
    }
}

/// On-disk form of [Dimension]: `"auto"` or a number.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DimensionRepr {
    Keyword(String),
    Value(f64),
}

impl TryFrom<DimensionRepr> for Dimension {
    type Error = String;

    fn try_from(repr: DimensionRepr) -> Result<Self, Self::Error> {
        match repr {
            DimensionRepr::Value(value) => Ok(Dimension::Fixed(value)),
            DimensionRepr::Keyword(word) if word.eq_ignore_ascii_case("auto") => Ok(Dimension::Auto),
            DimensionRepr::Keyword(word) => Err(format!(
                "expected \"auto\" or a number, found \"{word}\""
            )),
        }
    }
}

impl From<Dimension> for DimensionRepr {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Auto => DimensionRepr::Keyword("auto".to_string()),
            Dimension::Fixed(value) => DimensionRepr::Value(value),
        }
    }
}

/// Arrow centre, relative to the top-left corner of the bubble content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPlacement {
    /// Horizontal centre of the arrow.
    pub x: f64,
    /// Vertical centre of the arrow.
    pub y: f64,
}

impl ArrowPlacement {
    /// The arrow centre as a point.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Result of a positioning pass.
///
/// `x`/`y` is the centre of the bubble in the anchor's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Horizontal centre of the bubble.
    pub x: f64,
    /// Vertical centre of the bubble.
    pub y: f64,
    /// Arrow centre, if an arrow is drawn.
    pub arrow: Option<ArrowPlacement>,
}

impl Placement {
    /// The bubble centre as a point.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The rectangle covered by bubble content of the given size, in anchor-local space.
    pub fn content_rect(&self, content_size: Size) -> Rect {
        Rect::from_center_size(self.center(), content_size)
    }
}
