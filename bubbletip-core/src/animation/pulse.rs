// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Bounce Cue
//!
//! A visible tooltip rests for [AnimationConfig::time] seconds, then jumps
//! towards its anchor by [AnimationConfig::offset] for a tenth of that time,
//! then rests again, for as long as it stays visible.
//!
//! Two drivers share the [PulsePhase] model:
//!
//! - [PulseAnimation] is polled by the loop that owns the tooltip, like any
//!   other per-frame state.
//! - [run] is an async loop on [smol] timers for hosts that want to be woken
//!   up instead of polling. [spawn] puts it on the global executor and returns
//!   a [PulseHandle] that cancels it.
//!
//! Both stop rescheduling as soon as they are cancelled; a cancelled pulse
//! never moves the bubble again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use smol::{Task, Timer};

use crate::animation::easing::lerp;
use crate::config::AnimationConfig;

/// The two alternating states of the bounce cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulsePhase {
    /// No displacement.
    Rest,
    /// Displaced by the configured offset.
    Bounced,
}

impl PulsePhase {
    fn toggled(self) -> Self {
        match self {
            PulsePhase::Rest => PulsePhase::Bounced,
            PulsePhase::Bounced => PulsePhase::Rest,
        }
    }
}

/// Frame-polled bounce cue.
#[derive(Debug, Clone)]
pub struct PulseAnimation {
    config: AnimationConfig,
    phase: PulsePhase,
    phase_started: Instant,
    /// Displayed offset when the current phase began.
    from_offset: f64,
    running: bool,
}

impl PulseAnimation {
    /// Create a stopped pulse.
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            phase: PulsePhase::Rest,
            phase_started: Instant::now(),
            from_offset: 0.0,
            running: false,
        }
    }

    /// Start resting at `now`. Does nothing when the animation is disabled.
    pub fn start(&mut self, now: Instant) {
        if !self.config.enabled {
            return;
        }
        if self.config.rest_duration().is_zero() || self.config.bounce_duration().is_zero() {
            log::warn!("Not starting tooltip pulse with zero animation time");
            return;
        }

        log::debug!("Starting tooltip pulse every {:?}", self.config.rest_duration());
        self.phase = PulsePhase::Rest;
        self.phase_started = now;
        self.from_offset = 0.0;
        self.running = true;
    }

    /// Stop rescheduling and drop back to rest.
    pub fn cancel(&mut self) {
        if self.running {
            log::debug!("Cancelling tooltip pulse");
        }
        self.running = false;
        self.phase = PulsePhase::Rest;
        self.from_offset = 0.0;
    }

    /// Whether the pulse is scheduled.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current phase.
    pub fn phase(&self) -> PulsePhase {
        self.phase
    }

    /// The configuration this pulse runs with.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Advance the phase to `now`.
    ///
    /// Returns true if the bubble needs to be redrawn.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }

        let mut changed = self.skip_missed_cycles(now);
        loop {
            let duration = self.phase_duration(self.phase);
            if now.saturating_duration_since(self.phase_started) < duration {
                break;
            }
            self.from_offset = self.target_offset();
            self.phase_started += duration;
            self.phase = self.phase.toggled();
            changed = true;
        }

        // Still easing in or out of a bounce.
        changed || self.is_easing(now)
    }

    /// Offset the current phase settles at.
    pub fn target_offset(&self) -> f64 {
        match self.phase {
            PulsePhase::Rest => 0.0,
            PulsePhase::Bounced => self.config.offset,
        }
    }

    /// Eased offset to draw at `now`.
    ///
    /// Movement into and out of a bounce takes as long as the bounce itself.
    pub fn offset_at(&self, now: Instant) -> f64 {
        if !self.running {
            return 0.0;
        }

        let t = self.easing_progress(now);
        lerp(self.from_offset, self.target_offset(), self.config.easing.apply(t))
    }

    /// Jump over whole rest/bounce cycles missed while not polled.
    ///
    /// Every skipped cycle ends in the phase it started in, so only the
    /// phase start moves.
    fn skip_missed_cycles(&mut self, now: Instant) -> bool {
        let cycle = self.config.rest_duration() + self.config.bounce_duration();
        let behind = now.saturating_duration_since(self.phase_started);
        if cycle.is_zero() || behind < cycle * 2 {
            return false;
        }

        let skipped = behind.as_nanos() / cycle.as_nanos() - 1;
        let skip = u64::try_from(skipped * cycle.as_nanos()).unwrap_or(u64::MAX);
        self.phase_started += Duration::from_nanos(skip);
        true
    }

    fn is_easing(&self, now: Instant) -> bool {
        self.from_offset != self.target_offset() && self.easing_progress(now) < 1.0
    }

    fn easing_progress(&self, now: Instant) -> f64 {
        let window = self.config.bounce_duration().as_secs_f64();
        if window <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.phase_started).as_secs_f64();
        (elapsed / window).min(1.0)
    }

    fn phase_duration(&self, phase: PulsePhase) -> Duration {
        match phase {
            PulsePhase::Rest => self.config.rest_duration(),
            PulsePhase::Bounced => self.config.bounce_duration(),
        }
    }
}

/// Shared cancellation flag for [run].
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop before its next state change.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether [cancel](Self::cancel) was called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Drive the bounce cue on timers until `token` is cancelled.
///
/// `on_change` receives every phase change together with the offset to apply.
/// The token is checked after every wait, so cancelling during the first rest
/// means `on_change` is never called. Cancelling while bounced reports one
/// final [PulsePhase::Rest] so the bubble is not left displaced.
pub async fn run<F>(config: AnimationConfig, token: CancelToken, mut on_change: F)
where
    F: FnMut(PulsePhase, f64),
{
    if !config.enabled || config.rest_duration().is_zero() || config.bounce_duration().is_zero() {
        return;
    }

    loop {
        Timer::after(config.rest_duration()).await;
        if token.is_cancelled() {
            break;
        }
        on_change(PulsePhase::Bounced, config.offset);

        Timer::after(config.bounce_duration()).await;
        on_change(PulsePhase::Rest, 0.0);
        if token.is_cancelled() {
            break;
        }
    }

    log::debug!("Tooltip pulse loop stopped");
}

/// A running [run] loop on the global executor. Dropping it cancels the loop.
pub struct PulseHandle {
    token: CancelToken,
    task: Option<Task<()>>,
}

impl PulseHandle {
    /// Stop the loop before its next state change.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the loop was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until the loop has observed the cancellation and returned.
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            task.await;
        }
    }
}

impl Drop for PulseHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Spawn [run] on the smol global executor.
pub fn spawn<F>(config: AnimationConfig, on_change: F) -> PulseHandle
where
    F: FnMut(PulsePhase, f64) + Send + 'static,
{
    let token = CancelToken::new();
    let task = smol::spawn(run(config, token.clone(), on_change));
    PulseHandle {
        token,
        task: Some(task),
    }
}
