// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Anchored tooltip bubbles for vello based UI toolkits.

pub use nalgebra as math;
pub use vello::kurbo as geom;
pub use vello::peniko as color;

pub use bubbletip_core as core;
pub use bubbletip_theme as theme;

/// A "prelude" for users of bubbletip.
///
/// ```rust
/// use bubbletip::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::animation::easing::Easing;
    pub use crate::core::animation::pulse::{CancelToken, PulseAnimation, PulseHandle, PulsePhase};
    pub use crate::core::config::{AnimationConfig, FadeConfig, PlacementConfig, TooltipConfig};
    pub use crate::core::error::{ConfigError, ConfigResult};
    pub use crate::core::geometry::{ArrowPlacement, Dimension, Placement};
    pub use crate::core::positioner::place;
    pub use crate::core::side::TooltipSide;
    pub use crate::core::tooltip::{Tooltip, TooltipContent};
    pub use crate::core::vgi::vello_vg::VelloGraphics;
    pub use crate::core::vgi::Graphics;
    pub use crate::theme::style::{Padding, TooltipStyle};

    // Math
    pub use nalgebra::Vector2;

    // Geometry and color
    pub use vello::kurbo::{Affine, Point, Rect, Size};
    pub use vello::peniko::Color;
}
