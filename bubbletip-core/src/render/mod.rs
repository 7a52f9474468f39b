// SPDX-License-Identifier: MIT OR Apache-2.0
//! Drawing of the tooltip bubble.
//!
//! The bubble is a single outline: a rounded rectangle with the arrow merged
//! into the edge that faces the anchor. Filling and stroking that one path
//! gives a border that runs along the arrow and leaves no seam under its base.

/// Arrow triangle geometry.
pub mod arrow;

/// Bubble outline construction and painting.
pub mod bubble;

pub use arrow::ArrowGeometry;
pub use bubble::{bubble_path, paint_bubble};
