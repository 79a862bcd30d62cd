//! Pill-to-fullscreen panel expansion.

use crate::error::RigError;
use crate::input::ScrollSignal;
use crate::options::PanelOptions;
use crate::phase::PhaseRange;
use crate::util::easing::EasingFunction;

// Pill geometry at expansion 0, straight from the original layout.
const PILL_WIDTH_PCT: f32 = 45.0;
const PILL_HEIGHT_VH: f32 = 50.0;
const PILL_LEFT_PCT: f32 = 10.0;
const PILL_RADIUS_PX: f32 = 40.0;

/// Renderable geometry and overlay state for the expanding panel.
///
/// Percent/vh units are CSS-equivalents the render surface applies
/// directly; the raw `timeline` value is what the trigger sequencer
/// consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Stretched timeline value, in [0, timeline_scale].
    pub timeline: f32,
    /// Eased expansion, in [0, 1].
    pub expansion: f32,
    /// Whether the panel has snapped to exact full-screen literals.
    pub locked: bool,
    /// Panel width as a percentage of the viewport width.
    pub width_pct: f32,
    /// Panel height in viewport-height units.
    pub height_vh: f32,
    /// Left inset as a percentage of the viewport width.
    pub left_pct: f32,
    /// Corner radius in pixels.
    pub corner_radius_px: f32,
    /// Headline fade-in, in [0, 1]. Starts at timeline 0.5.
    pub headline_opacity: f32,
    /// Whether the body copy below the headline is revealed.
    pub body_revealed: bool,
    /// Card stack fade-in, in [0, 1]. Starts at timeline 0.8.
    pub card_stack_opacity: f32,
    /// Background sketch-line opacity, in [0.6, 1.0].
    pub sketch_opacity: f32,
}

/// Maps scroll offset to the panel's frame.
///
/// The panel's clamped progress is stretched by `timeline_scale` so the
/// expansion finishes at timeline 1.0 with scroll room left over for the
/// overlay reveals and the card-swap triggers. Once the eased expansion
/// crosses `lock_threshold` the geometry switches to exact full-screen
/// literals — interpolating to 99.x% leaves a visible sub-pixel seam at
/// the viewport edge.
#[derive(Debug, Clone)]
pub struct PanelDriver {
    range: PhaseRange,
    timeline_scale: f32,
    easing: EasingFunction,
    lock_threshold: f32,
}

impl PanelDriver {
    /// Build a driver from validated options.
    pub fn new(options: &PanelOptions) -> Result<Self, RigError> {
        options.validate()?;
        Ok(Self {
            range: PhaseRange::new(
                options.range.start_px,
                options.range.end_px,
            )?,
            timeline_scale: options.timeline_scale,
            easing: options.easing,
            lock_threshold: options.lock_threshold,
        })
    }

    /// Derive the panel frame for one scroll snapshot.
    #[must_use]
    pub fn evaluate(&self, signal: ScrollSignal) -> PanelFrame {
        let timeline =
            self.range.timeline(signal.offset_px, self.timeline_scale);
        let capped = timeline.min(1.0);
        let eased = self.easing.evaluate(capped);
        let locked = capped >= self.lock_threshold;

        let (width_pct, height_vh, left_pct, corner_radius_px) = if locked {
            (100.0, 100.0, 0.0, 0.0)
        } else {
            (
                PILL_WIDTH_PCT + eased * (100.0 - PILL_WIDTH_PCT),
                PILL_HEIGHT_VH + eased * (100.0 - PILL_HEIGHT_VH),
                PILL_LEFT_PCT * (1.0 - eased),
                PILL_RADIUS_PX * (1.0 - eased),
            )
        };

        PanelFrame {
            timeline,
            expansion: eased,
            locked,
            width_pct,
            height_vh,
            left_pct,
            corner_radius_px,
            headline_opacity: ((timeline - 0.5) * 5.0).clamp(0.0, 1.0),
            body_revealed: timeline > 0.6,
            card_stack_opacity: ((timeline - 0.8) * 5.0).clamp(0.0, 1.0),
            sketch_opacity: 0.6 + eased * 0.4,
        }
    }
}
