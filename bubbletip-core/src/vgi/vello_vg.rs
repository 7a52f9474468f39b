// SPDX-License-Identifier: MIT OR Apache-2.0
use vello::kurbo::{Affine, BezPath, Stroke};
use vello::peniko::{Brush, Fill, Mix};
use vello::Scene;

use crate::vgi::Graphics;

/// A Vello-based implementation of the [Graphics] trait.
pub struct VelloGraphics<'a> {
    scene: &'a mut Scene,
}

impl<'a> VelloGraphics<'a> {
    /// Create a new VelloGraphics from a Scene reference.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene }
    }
}

impl Graphics for VelloGraphics<'_> {
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene.fill(fill_rule, transform, brush, brush_transform, shape);
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene.stroke(style, transform, brush, brush_transform, shape);
    }

    fn push_layer(&mut self, alpha: f32, transform: Affine, clip: &BezPath) {
        self.scene.push_layer(Mix::Normal, alpha, transform, clip);
    }

    fn pop_layer(&mut self) {
        self.scene.pop_layer();
    }
}
