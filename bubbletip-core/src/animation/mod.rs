// SPDX-License-Identifier: MIT OR Apache-2.0
//! Time-driven effects of a visible tooltip.

/// Easing curves.
pub mod easing;

/// The fade-in transition.
pub mod fade;

/// The bounce cue.
pub mod pulse;
