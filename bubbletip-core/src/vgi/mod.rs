// SPDX-License-Identifier: MIT OR Apache-2.0
//! Vector Graphics Interface abstraction.
//!
//! Tooltips draw through [Graphics] so hosts can hand in their own backend.
//! [vello_vg::VelloGraphics] draws straight into a [vello::Scene].

use vello::kurbo::{Affine, BezPath, Shape, Stroke};
use vello::peniko::{Brush, Fill};

/// A trait for rendering vector graphics.
///
/// Methods take `&BezPath` so the trait stays object-safe. Convert concrete
/// shapes with [shape_to_path].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Push a new layer clipped to `clip` and drawn with the given alpha.
    fn push_layer(&mut self, alpha: f32, transform: Affine, clip: &BezPath);

    /// Pop the most recent layer.
    fn pop_layer(&mut self);
}

/// Helper function to convert a shape to BezPath for use with Graphics trait.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A default graphics implementation using Vello.
pub mod vello_vg;
