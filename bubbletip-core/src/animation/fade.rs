// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Fade-in Transition
//!
//! Opacity ramp used when a tooltip appears.

use std::time::{Duration, Instant};

use crate::config::FadeConfig;

/// State of an active fade-in.
#[derive(Debug, Clone, Copy)]
pub struct FadeIn {
    /// When the fade started.
    start_time: Instant,
    /// How long the fade takes. Zero means "fully visible at once".
    duration: Duration,
}

impl FadeIn {
    /// Start a fade at `now`. A disabled config yields an already-complete fade.
    pub fn start(config: &FadeConfig, now: Instant) -> Self {
        let duration = if config.enabled {
            config.duration()
        } else {
            Duration::ZERO
        };
        Self {
            start_time: now,
            duration,
        }
    }

    /// Check if the fade is complete.
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start_time) >= self.duration
    }

    /// Get the progress of the fade (0.0 to 1.0).
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed >= self.duration {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        }
    }

    /// Layer alpha at `now`.
    pub fn alpha(&self, now: Instant) -> f32 {
        self.progress(now).clamp(0.0, 1.0)
    }
}
