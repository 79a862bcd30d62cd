//! Latest-wins sampling of scroll and resize notifications.
//!
//! The sampler is the only component that touches raw viewport events.
//! It does O(1) bookkeeping per event — overwrite the latest sample,
//! nothing else — so the (irregular, browser-paced) event stream never
//! carries derivation work. Downstream consumers read one immutable
//! [`ScrollSignal`] snapshot per repaint tick.

use super::event::ViewportEvent;

/// Viewport height assumed before the first layout, in pixels.
///
/// Non-zero so viewport-relative breakpoints (e.g. "5.5 viewports") never
/// divide by or multiply against zero before the first resize arrives.
pub const DEFAULT_VIEWPORT_HEIGHT_PX: f32 = 800.0;

/// One immutable sample of the viewport: scroll offset plus height.
///
/// Produced by the [`ScrollSampler`]; read-only to every downstream
/// consumer. There is no identity — a newer sample always supersedes an
/// older one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSignal {
    /// Vertical scroll offset from the top of the page, in pixels.
    pub offset_px: f32,
    /// Visible viewport height, in pixels. Always positive.
    pub viewport_height_px: f32,
}

impl ScrollSignal {
    /// Signal for a freshly loaded page: offset 0, default viewport.
    #[must_use]
    pub fn at_rest() -> Self {
        Self {
            offset_px: 0.0,
            viewport_height_px: DEFAULT_VIEWPORT_HEIGHT_PX,
        }
    }

    /// Scroll offset expressed in viewport heights.
    #[must_use]
    pub fn viewports(self) -> f32 {
        self.offset_px / self.viewport_height_px
    }
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::at_rest()
    }
}

/// Folds viewport events into the current [`ScrollSignal`], latest wins.
///
/// Mirrors a scroll/resize listener registration: events are accepted
/// while attached and ignored after [`detach`](Self::detach) — a
/// notification that arrives after teardown must not write into a
/// disposed view.
#[derive(Debug, Clone)]
pub struct ScrollSampler {
    latest: ScrollSignal,
    attached: bool,
    /// Set once the first post-detach event has been reported.
    warned_detached: bool,
}

impl ScrollSampler {
    /// Create an attached sampler with the at-rest signal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            latest: ScrollSignal::at_rest(),
            attached: true,
            warned_detached: false,
        }
    }

    /// Fold one viewport event into the latest sample.
    ///
    /// Out-of-domain measurements degrade to neutral values instead of
    /// propagating NaN or negative geometry: non-finite or negative
    /// offsets clamp to 0, non-positive or non-finite heights fall back
    /// to [`DEFAULT_VIEWPORT_HEIGHT_PX`].
    pub fn handle_event(&mut self, event: ViewportEvent) {
        if !self.attached {
            if !self.warned_detached {
                log::warn!("viewport event after detach: {event:?}");
                self.warned_detached = true;
            }
            return;
        }

        match event {
            ViewportEvent::Scrolled { offset_px } => {
                self.latest.offset_px = if offset_px.is_finite() {
                    offset_px.max(0.0)
                } else {
                    0.0
                };
            }
            ViewportEvent::Resized { viewport_height_px } => {
                self.latest.viewport_height_px = if viewport_height_px
                    .is_finite()
                    && viewport_height_px > 0.0
                {
                    viewport_height_px
                } else {
                    DEFAULT_VIEWPORT_HEIGHT_PX
                };
            }
        }
    }

    /// The current snapshot. Stable for the duration of a frame as long
    /// as the caller reads it once and passes it down (see
    /// [`Rig::frame`](crate::rig::Rig::frame)).
    #[must_use]
    pub fn signal(&self) -> ScrollSignal {
        self.latest
    }

    /// Stop accepting events. Subsequent events are dropped.
    pub fn detach(&mut self) {
        if self.attached {
            log::debug!("scroll sampler detached");
        }
        self.attached = false;
    }

    /// Whether the sampler is still accepting events.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Default for ScrollSampler {
    fn default() -> Self {
        Self::new()
    }
}
