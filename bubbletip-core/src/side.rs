// SPDX-License-Identifier: MIT OR Apache-2.0
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Which edge of the anchor the tooltip is placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipSide {
    /// Above the anchor. The arrow points down.
    #[default]
    Top,
    /// Below the anchor. The arrow points up.
    Bottom,
}

impl TooltipSide {
    /// Rotation of the arrow glyph in radians, `None` if this side draws no arrow.
    ///
    /// The unrotated arrow points up, which is what a bubble below its anchor needs.
    pub fn arrow_angle(self) -> Option<f64> {
        match self {
            TooltipSide::Top => Some(PI),
            TooltipSide::Bottom => Some(0.0),
        }
    }

    /// Whether an arrow can be drawn on this side.
    pub fn shows_arrow(self) -> bool {
        self.arrow_angle().is_some()
    }

    /// Sign of a vertical displacement that moves the bubble towards its anchor.
    pub fn toward_anchor(self) -> f64 {
        match self {
            TooltipSide::Top => 1.0,
            TooltipSide::Bottom => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_angles() {
        assert_eq!(TooltipSide::Bottom.arrow_angle(), Some(0.0));
        assert_eq!(TooltipSide::Top.arrow_angle(), Some(PI));
        assert!(TooltipSide::Top.shows_arrow());
        assert!(TooltipSide::Bottom.shows_arrow());
    }
}
