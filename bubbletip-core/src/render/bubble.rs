// SPDX-License-Identifier: MIT OR Apache-2.0
use bubbletip_theme::style::TooltipStyle;
use vello::kurbo::{Affine, BezPath, Rect, Stroke};
use vello::peniko::{Brush, Fill};

use crate::render::arrow::ArrowGeometry;
use crate::vgi::Graphics;

/// Control point distance for a quarter circle drawn as one cubic.
const KAPPA: f64 = 0.552_284_749_831;

/// Outline of a rounded `rect`, with `arrow` cut into the edge its tip points past.
///
/// The radius is clamped to half the shorter side. The arrow base is clamped
/// between the corners so the outline never crosses itself; the tip keeps its
/// position.
pub fn bubble_path(rect: Rect, radius: f64, arrow: Option<&ArrowGeometry>) -> BezPath {
    let rect = rect.abs();
    let r = radius.max(0.0).min(rect.width() / 2.0).min(rect.height() / 2.0);
    let k = r * KAPPA;
    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);

    let arrow_on_top = arrow.filter(|a| a.tip.y < rect.center().y);
    let arrow_on_bottom = arrow.filter(|a| a.tip.y >= rect.center().y);
    // Rounding can put `x1 - r` a hair left of `x0 + r` on a pill.
    let (lo, hi) = (x0 + r, (x1 - r).max(x0 + r));
    let clamp_x = |x: f64| x.clamp(lo, hi);

    let mut path = BezPath::new();
    path.move_to((x0 + r, y0));

    if let Some(arrow) = arrow_on_top {
        let (left, right) = arrow.base_by_x();
        path.line_to((clamp_x(left.x), y0));
        path.line_to(arrow.tip);
        path.line_to((clamp_x(right.x), y0));
    }

    path.line_to((x1 - r, y0));
    path.curve_to((x1 - r + k, y0), (x1, y0 + r - k), (x1, y0 + r));
    path.line_to((x1, y1 - r));
    path.curve_to((x1, y1 - r + k), (x1 - r + k, y1), (x1 - r, y1));

    if let Some(arrow) = arrow_on_bottom {
        let (left, right) = arrow.base_by_x();
        path.line_to((clamp_x(right.x), y1));
        path.line_to(arrow.tip);
        path.line_to((clamp_x(left.x), y1));
    }

    path.line_to((x0 + r, y1));
    path.curve_to((x0 + r - k, y1), (x0, y1 - r + k), (x0, y1 - r));
    path.line_to((x0, y0 + r));
    path.curve_to((x0, y0 + r - k), (x0 + r - k, y0), (x0 + r, y0));
    path.close_path();
    path
}

/// Fill the outline with the background color and stroke it with the border.
pub fn paint_bubble(graphics: &mut dyn Graphics, path: &BezPath, style: &TooltipStyle, transform: Affine) {
    graphics.fill(
        Fill::NonZero,
        transform,
        &Brush::Solid(style.background_color),
        None,
        path,
    );

    if style.border_width > 0.0 {
        graphics.stroke(
            &Stroke::new(style.border_width),
            transform,
            &Brush::Solid(style.border_color),
            None,
            path,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use vello::kurbo::{Point, Shape};

    #[test]
    fn test_plain_bubble_bounds() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let path = bubble_path(rect, 8.0, None);
        let bounds = path.bounding_box();
        assert!((bounds.x0 - 0.0).abs() < 1e-9 && (bounds.x1 - 100.0).abs() < 1e-9);
        assert!((bounds.y0 - 0.0).abs() < 1e-9 && (bounds.y1 - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_arrow_extends_outline() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let arrow = ArrowGeometry::new(Point::new(50.0, -2.0), 12.0, 6.0, 0.0);
        let bounds = bubble_path(rect, 8.0, Some(&arrow)).bounding_box();
        assert!((bounds.y0 - arrow.tip.y).abs() < 1e-9);
        assert!((bounds.y1 - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_bottom_arrow_extends_outline() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let arrow = ArrowGeometry::new(Point::new(50.0, 42.0), 12.0, 6.0, PI);
        let bounds = bubble_path(rect, 8.0, Some(&arrow)).bounding_box();
        assert!((bounds.y1 - arrow.tip.y).abs() < 1e-9);
        assert!((bounds.y0 - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_arrow_base_clamped_out_of_corner() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let arrow = ArrowGeometry::new(Point::new(2.0, -2.0), 12.0, 6.0, 0.0);
        let path = bubble_path(rect, 8.0, Some(&arrow));
        let on_top_edge: Vec<f64> = path
            .elements()
            .iter()
            .filter_map(|el| match el {
                vello::kurbo::PathEl::LineTo(p) if p.y == 0.0 => Some(p.x),
                _ => None,
            })
            .collect();
        assert!(on_top_edge.iter().all(|x| *x >= 8.0 && *x <= 92.0));
    }

    #[test]
    fn test_pill_with_arrow_at_fractional_center() {
        let rect = Rect::from_center_size((109.39051866884431, 0.0), (92.46108968180899, 120.0));
        let arrow = ArrowGeometry::new(Point::new(rect.center().x, rect.y0 - 2.0), 12.0, 6.0, 0.0);
        let bounds = bubble_path(rect, 100.0, Some(&arrow)).bounding_box();
        assert!((bounds.y0 - arrow.tip.y).abs() < 1e-9);
        assert!((bounds.width() - rect.width()).abs() < 1e-9);
    }

    #[test]
    fn test_radius_clamped_to_half_height() {
        let rect = Rect::new(0.0, 0.0, 100.0, 10.0);
        let bounds = bubble_path(rect, 50.0, None).bounding_box();
        assert!((bounds.width() - 100.0).abs() < 1e-9);
        assert!((bounds.height() - 10.0).abs() < 1e-9);
    }
}
