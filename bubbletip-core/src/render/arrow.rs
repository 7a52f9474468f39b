// SPDX-License-Identifier: MIT OR Apache-2.0
use vello::kurbo::{Affine, Point, Vec2};

/// The three corners of the arrow triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    /// The point touching the anchor side.
    pub tip: Point,
    /// Base corner on the left of the tip's direction of travel.
    pub base_start: Point,
    /// Base corner on the right of the tip's direction of travel.
    pub base_end: Point,
}

impl ArrowGeometry {
    /// Build an arrow of `width` × `height` centred on `center` and rotated by `angle`.
    ///
    /// At angle zero the tip points up, i.e. towards negative y.
    pub fn new(center: Point, width: f64, height: f64, angle: f64) -> Self {
        let rotate = Affine::rotate_about(angle, center);
        let at = |dx: f64, dy: f64| rotate * (center + Vec2::new(dx, dy));

        Self {
            tip: at(0.0, -height / 2.0),
            base_start: at(-width / 2.0, height / 2.0),
            base_end: at(width / 2.0, height / 2.0),
        }
    }

    /// Shift every corner by `offset`.
    pub fn translate(self, offset: Vec2) -> Self {
        Self {
            tip: self.tip + offset,
            base_start: self.base_start + offset,
            base_end: self.base_end + offset,
        }
    }

    /// Base corners ordered by x.
    pub fn base_by_x(&self) -> (Point, Point) {
        if self.base_start.x <= self.base_end.x {
            (self.base_start, self.base_end)
        } else {
            (self.base_end, self.base_start)
        }
    }
}
