// SPDX-License-Identifier: MIT OR Apache-2.0
//! The tooltip attached to a single anchor.
//!
//! [Tooltip] owns everything that changes while a tooltip is on screen: the
//! measured content size, the last placement, the fade-in and the bounce cue.
//! The host drives it from its own loop:
//!
//! 1. [Tooltip::set_enabled] when the tooltip should appear or go away
//! 2. [Tooltip::layout] on every layout pass of the anchor
//! 3. [Tooltip::update] once per frame, redrawing when it returns true
//! 4. [Tooltip::render] into the overlay scene

use std::time::Instant;

use nalgebra::Vector2;
use vello::kurbo::{Affine, Rect, Shape, Size, Vec2};

use crate::animation::fade::FadeIn;
use crate::animation::pulse::PulseAnimation;
use crate::config::TooltipConfig;
use crate::geometry::Placement;
use crate::positioner::place;
use crate::render::{bubble_path, paint_bubble, ArrowGeometry};
use crate::vgi::{shape_to_path, Graphics};

/// Content size assumed until the first measurement.
const UNMEASURED_SIZE: f64 = 10.0;

/// Something that can be shown inside a tooltip bubble.
pub trait TooltipContent {
    /// Natural size of the content, without padding.
    fn natural_size(&self) -> Size;

    /// Draw the content inside `bounds`.
    fn render(&self, graphics: &mut dyn Graphics, transform: Affine, bounds: Rect);
}

/// A tooltip bound to one anchor.
pub struct Tooltip<C: TooltipContent> {
    config: TooltipConfig,
    content: C,
    enabled: bool,
    content_size: Size,
    placement: Option<Placement>,
    pulse: PulseAnimation,
    fade: Option<FadeIn>,
}

impl<C: TooltipContent> Tooltip<C> {
    /// Create a hidden tooltip.
    pub fn new(config: TooltipConfig, content: C) -> Self {
        let pulse = PulseAnimation::new(config.animation.clone());
        Self {
            config,
            content,
            enabled: false,
            content_size: Size::new(UNMEASURED_SIZE, UNMEASURED_SIZE),
            placement: None,
            pulse,
            fade: None,
        }
    }

    /// Show or hide the tooltip.
    ///
    /// Showing measures the content, starts the fade-in and the bounce cue.
    /// Hiding cancels the bounce cue.
    pub fn set_enabled(&mut self, enabled: bool, now: Instant) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;

        if enabled {
            log::debug!("Showing tooltip on {:?}", self.config.side);
            self.measure();
            self.fade = Some(FadeIn::start(&self.config.fade_in, now));
            self.pulse.start(now);
        } else {
            log::debug!("Hiding tooltip");
            self.pulse.cancel();
            self.fade = None;
        }
    }

    /// Whether the tooltip is shown.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Replace the configuration. A visible tooltip is re-measured and its
    /// bounce cue restarted with the new settings.
    pub fn set_config(&mut self, config: TooltipConfig, now: Instant) {
        self.pulse.cancel();
        self.pulse = PulseAnimation::new(config.animation.clone());
        self.config = config;

        if self.enabled {
            self.measure();
            self.pulse.start(now);
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// The content shown in the bubble.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the content. Call [measure](Self::measure) after
    /// changing its size.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Run the measurement pass: padded natural size, overridden by fixed dimensions.
    pub fn measure(&mut self) -> Size {
        let natural = self.config.style.padding.expand(self.content.natural_size());
        self.content_size = self.config.placement().resolve_content_size(natural);
        self.content_size
    }

    /// Current bubble size.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Position the bubble for the anchor's current frame.
    ///
    /// `anchor_frame_global` is in viewport coordinates and `viewport` is the
    /// viewport size; the stored placement is in the anchor's local space.
    pub fn layout(
        &mut self,
        anchor_frame_global: Rect,
        anchor_size_local: Size,
        viewport: Vector2<f64>,
    ) -> Placement {
        let placement = place(
            anchor_frame_global,
            anchor_size_local,
            self.content_size,
            &self.config.placement(),
            viewport.x,
        );
        self.placement = Some(placement);
        placement
    }

    /// The placement from the last layout pass.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Advance the fade and bounce cue.
    ///
    /// Returns true if the tooltip needs to be redrawn.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }

        let fading = self.fade.is_some_and(|fade| !fade.is_complete(now));
        let pulsing = self.pulse.update(now);
        fading || pulsing
    }

    /// Vertical displacement of the bubble caused by the bounce cue.
    pub fn bounce_offset(&self, now: Instant) -> f64 {
        self.pulse.offset_at(now) * self.config.side.toward_anchor()
    }

    /// Layer alpha from the fade-in.
    pub fn alpha(&self, now: Instant) -> f32 {
        self.fade.map_or(1.0, |fade| fade.alpha(now))
    }

    /// Draw the bubble, arrow and content.
    ///
    /// `anchor_transform` maps the anchor's local space into the scene.
    /// Nothing is drawn while hidden or before the first layout pass.
    pub fn render(&self, graphics: &mut dyn Graphics, anchor_transform: Affine, now: Instant) {
        if !self.enabled {
            return;
        }
        let Some(placement) = self.placement else {
            return;
        };

        let bubble = placement.content_rect(self.content_size);
        let arrow = self.arrow_geometry(&placement, bubble);
        let path = bubble_path(bubble, self.config.style.border_radius, arrow.as_ref());

        let transform = anchor_transform * Affine::translate(Vec2::new(0.0, self.bounce_offset(now)));
        let inflate = self.config.style.border_width;
        let clip = path.bounding_box().inflate(inflate, inflate);

        graphics.push_layer(self.alpha(now), transform, &shape_to_path(&clip));
        paint_bubble(graphics, &path, &self.config.style, transform);
        self.content.render(graphics, transform, bubble - self.config.style.padding.to_insets());
        graphics.pop_layer();
    }

    fn arrow_geometry(&self, placement: &Placement, bubble: Rect) -> Option<ArrowGeometry> {
        let arrow = placement.arrow?;
        let angle = self.config.side.arrow_angle()?;
        let geometry = ArrowGeometry::new(
            arrow.center(),
            self.config.arrow_width,
            self.config.arrow_height,
            angle,
        );
        Some(geometry.translate(bubble.origin().to_vec2()))
    }
}
