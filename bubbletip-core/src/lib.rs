// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Core of the bubbletip tooltip overlay.
//!
//! The interesting part is [positioner::place], which keeps a bubble next to
//! its anchor and inside the viewport. Everything else supports drawing and
//! animating that bubble.

pub use bubbletip_theme as theme;
pub use vello;

/// Bounce and fade effects.
pub mod animation;

/// Tooltip configuration.
pub mod config;

/// Configuration error types.
pub mod error;

/// Geometry types.
pub mod geometry;

/// Anchor-relative bubble placement.
pub mod positioner;

/// Bubble and arrow drawing.
pub mod render;

/// Tooltip side.
pub mod side;

/// The tooltip controller.
pub mod tooltip;

/// Vector graphics interface.
pub mod vgi;
