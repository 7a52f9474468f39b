// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Styling for bubbletip tooltips.
//!
//! Holds the visual half of a tooltip configuration: colors, border and corner
//! geometry and content padding. Geometry and behaviour live in `bubbletip-core`.

/// Theme error types.
pub mod error;

/// Hex color (de)serialization helpers for [vello::peniko::Color].
pub mod serde_color;

/// The tooltip container style.
pub mod style;
