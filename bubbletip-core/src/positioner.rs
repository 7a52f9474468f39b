// SPDX-License-Identifier: MIT OR Apache-2.0
//! Anchor-relative placement of the tooltip bubble.
//!
//! The bubble is centred over its anchor, then pushed sideways just enough to
//! keep `gutter` between it and the viewport edges. Vertically it is only
//! offset to the configured side, never clamped.

use vello::kurbo::{Rect, Size};

use crate::config::PlacementConfig;
use crate::geometry::{ArrowPlacement, Placement};
use crate::side::TooltipSide;

/// Compute where to draw the bubble.
///
/// - `anchor_frame_global`: anchor frame in viewport coordinates
/// - `anchor_size_local`: anchor size in its own coordinate space
/// - `content_size`: measured (or fixed) bubble size
/// - `viewport_width`: width of the viewport the bubble must stay inside
///
/// The result is in the anchor's local space. Only one horizontal correction
/// is applied per pass; when the bubble overflows both edges the right edge wins.
pub fn place(
    anchor_frame_global: Rect,
    anchor_size_local: Size,
    content_size: Size,
    config: &PlacementConfig,
    viewport_width: f64,
) -> Placement {
    let x = horizontal(anchor_frame_global, anchor_size_local, content_size, config.gutter, viewport_width);
    let arrow_height = config.effective_arrow_height();

    let offset = content_size.height / 2.0 + config.border_width + arrow_height + config.margin;
    let y = match config.side {
        TooltipSide::Top => -offset,
        TooltipSide::Bottom => anchor_size_local.height + offset,
    };

    let arrow = config.arrow_visible().then(|| ArrowPlacement {
        x: (content_size.width + anchor_size_local.width) / 2.0 - x,
        y: match config.side {
            TooltipSide::Bottom => (config.border_width - arrow_height) / 2.0,
            TooltipSide::Top => content_size.height + (arrow_height - config.border_width) / 2.0,
        },
    });

    Placement { x, y, arrow }
}

fn horizontal(
    anchor_frame_global: Rect,
    anchor_size_local: Size,
    content_size: Size,
    gutter: f64,
    viewport_width: f64,
) -> f64 {
    let mut x = anchor_size_local.width / 2.0;
    let mid_x = anchor_frame_global.center().x;
    let half_width = content_size.width / 2.0;

    if mid_x + half_width > viewport_width - gutter {
        let shift = mid_x + half_width - viewport_width + gutter;
        log::trace!("Tooltip overflows right edge, shifting left by {}", shift);
        x -= shift;
    } else if mid_x - half_width < gutter {
        let shift = half_width - mid_x + gutter;
        log::trace!("Tooltip overflows left edge, shifting right by {}", shift);
        x += shift;
    }

    x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(side: TooltipSide) -> PlacementConfig {
        PlacementConfig {
            side,
            margin: 5.0,
            gutter: 10.0,
            border_width: 2.0,
            arrow_height: 6.0,
            show_arrow: true,
            ..PlacementConfig::default()
        }
    }

    fn anchor() -> (Rect, Size) {
        (Rect::new(0.0, 100.0, 100.0, 130.0), Size::new(100.0, 30.0))
    }

    #[test]
    fn test_centered_when_there_is_room() {
        let (frame, size) = anchor();
        let placement = place(frame, size, Size::new(120.0, 40.0), &config(TooltipSide::Top), 400.0);
        // Anchor centre 50, half bubble 60 => 50 - 60 < 10, so it is pushed right.
        assert_eq!(placement.x, 50.0 + (60.0 - 50.0 + 10.0));

        let frame = Rect::new(100.0, 100.0, 200.0, 130.0);
        let placement = place(frame, size, Size::new(120.0, 40.0), &config(TooltipSide::Top), 400.0);
        assert_eq!(placement.x, 50.0);
    }

    #[test]
    fn test_right_overflow_shifts_left() {
        let frame = Rect::new(300.0, 0.0, 400.0, 30.0);
        let size = Size::new(100.0, 30.0);
        let placement = place(frame, size, Size::new(120.0, 40.0), &config(TooltipSide::Top), 400.0);
        // centre 350 + 60 = 410 > 390 => shift 20
        assert_eq!(placement.x, 30.0);
    }

    #[test]
    fn test_right_edge_wins_when_both_overflow() {
        let (frame, size) = anchor();
        let placement = place(frame, size, Size::new(120.0, 40.0), &config(TooltipSide::Top), 60.0);
        let shift = (50.0 + 60.0) - 60.0 + 10.0;
        assert_eq!(placement.x, 50.0 - shift);
    }

    #[test]
    fn test_vertical_offsets() {
        let (frame, size) = anchor();
        let content = Size::new(80.0, 40.0);

        let top = place(frame, size, content, &config(TooltipSide::Top), 400.0);
        assert_eq!(top.y, -(20.0 + 2.0 + 6.0 + 5.0));

        let bottom = place(frame, size, content, &config(TooltipSide::Bottom), 400.0);
        assert_eq!(bottom.y, 30.0 + 20.0 + 2.0 + 6.0 + 5.0);
    }

    #[test]
    fn test_arrow_height_ignored_without_arrow() {
        let (frame, size) = anchor();
        let mut config = config(TooltipSide::Top);
        config.show_arrow = false;

        let placement = place(frame, size, Size::new(80.0, 40.0), &config, 400.0);
        assert_eq!(placement.y, -(20.0 + 2.0 + 5.0));
        assert!(placement.arrow.is_none());
    }

    #[test]
    fn test_arrow_follows_anchor_when_clamped() {
        let frame = Rect::new(300.0, 0.0, 400.0, 30.0);
        let size = Size::new(100.0, 30.0);
        let content = Size::new(120.0, 40.0);

        let bottom = place(frame, size, content, &config(TooltipSide::Bottom), 400.0);
        let arrow = bottom.arrow.unwrap();
        // Bubble moved 20 left, so the arrow sits 20 right of the bubble centre.
        assert_eq!(arrow.x, 80.0);
        assert_eq!(arrow.y, (2.0 - 6.0) / 2.0);

        let top = place(frame, size, content, &config(TooltipSide::Top), 400.0);
        assert_eq!(top.arrow.unwrap().y, 40.0 + (6.0 - 2.0) / 2.0);
    }

    #[test]
    fn test_fixed_size_does_not_affect_placement_input() {
        let mut config = config(TooltipSide::Top);
        config.width = crate::geometry::Dimension::Fixed(200.0);
        let size = config.resolve_content_size(Size::new(50.0, 20.0));
        assert_eq!(size, Size::new(200.0, 20.0));
    }
}
