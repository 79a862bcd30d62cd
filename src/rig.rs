//! The per-frame controller tying sampler, drivers, and sequencer
//! together.
//!
//! Two entry points, one per timing domain: [`Rig::handle_event`] for the
//! irregular scroll/resize stream (O(1) bookkeeping), and [`Rig::frame`]
//! for the repaint tick, where the scroll signal is snapshotted once and
//! every derived value is computed from that single snapshot. Nothing
//! downstream ever re-reads the live offset mid-frame.

use web_time::Instant;

use crate::drivers::{
    FigurePose, FigureRigDriver, PanelDriver, PanelFrame, TunnelDriver,
    TunnelView,
};
use crate::error::RigError;
use crate::input::{ScrollSampler, ScrollSignal, ViewportEvent};
use crate::options::RigOptions;
use crate::sequencer::TriggerSequencer;
use crate::surface::RenderSurface;
use crate::util::frame_timing::FramePacer;

/// Scroll readout for a debug overlay: raw pixels plus viewport ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReadout {
    /// Scroll offset, rounded to whole pixels.
    pub offset_px: i32,
    /// Scroll offset in viewport heights, to two decimals' worth of
    /// precision.
    pub viewports: f32,
}

/// Everything derived for one repaint tick, from one scroll snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigFrame {
    /// The snapshot every value below was derived from.
    pub signal: ScrollSignal,
    /// Figure rig pose.
    pub figure: FigurePose,
    /// Expanding panel geometry and overlays.
    pub panel: PanelFrame,
    /// Tunnel depth/flash state.
    pub tunnel: TunnelView,
    /// How many card-swap triggers fired during this frame.
    pub card_advances: usize,
    /// Debug readout, present when enabled in the options.
    pub readout: Option<ScrollReadout>,
}

/// Owns the full pipeline: sampler, the three drivers, the trigger
/// latch, and the repaint pacer.
#[derive(Debug)]
pub struct Rig {
    sampler: ScrollSampler,
    figure: FigureRigDriver,
    panel: PanelDriver,
    tunnel: TunnelDriver,
    sequencer: TriggerSequencer,
    pacer: FramePacer,
    emit_readout: bool,
}

impl Rig {
    /// Build the pipeline from validated options.
    pub fn new(options: &RigOptions) -> Result<Self, RigError> {
        let rig = Self {
            sampler: ScrollSampler::new(),
            figure: FigureRigDriver::new(&options.figure)?,
            panel: PanelDriver::new(&options.panel)?,
            tunnel: TunnelDriver::new(&options.tunnel)?,
            sequencer: TriggerSequencer::new(&options.triggers)?,
            pacer: FramePacer::new(options.frame.target_fps),
            emit_readout: options.debug.scroll_readout,
        };
        log::info!(
            "rig ready (target {} fps)",
            options.frame.target_fps
        );
        Ok(rig)
    }

    /// Fold one viewport event into the sampler. O(1); no derivation
    /// happens here — that is the repaint tick's job.
    pub fn handle_event(&mut self, event: ViewportEvent) {
        self.sampler.handle_event(event);
    }

    /// Stop listening to viewport events, e.g. on navigation away.
    ///
    /// Frames can still be derived from the last sample, but no further
    /// event will change it.
    pub fn detach(&mut self) {
        self.sampler.detach();
    }

    /// Current smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.pacer.fps()
    }

    /// Run one repaint tick.
    ///
    /// Returns `None` when the pacer says the refresh interval has not
    /// elapsed. Otherwise snapshots the scroll signal once and derives
    /// the whole frame from it, in dependency order: signal, then the
    /// section phases inside each driver, then visual properties, then
    /// the trigger observation.
    pub fn frame(&mut self, now: Instant) -> Option<RigFrame> {
        if !self.pacer.ready(now) {
            return None;
        }
        self.pacer.tick(now);
        Some(self.derive(self.sampler.signal()))
    }

    /// Run one repaint tick and push the result to a surface.
    ///
    /// Returns the derived frame, or `None` when the tick was skipped.
    pub fn frame_to<S: RenderSurface>(
        &mut self,
        now: Instant,
        surface: &mut S,
    ) -> Option<RigFrame> {
        let frame = self.frame(now)?;
        crate::surface::apply(&frame, surface);
        Some(frame)
    }

    /// Derive a full frame from one explicit snapshot.
    ///
    /// This is the whole pipeline minus pacing, exposed for tests and for
    /// embeddings that bring their own tick. Mutates only the trigger
    /// latch.
    pub fn derive(&mut self, signal: ScrollSignal) -> RigFrame {
        let figure = self.figure.evaluate(signal);
        let panel = self.panel.evaluate(signal);
        let tunnel = self.tunnel.evaluate(signal);
        let card_advances = self.sequencer.observe(panel.timeline);

        let readout = self.emit_readout.then(|| ScrollReadout {
            offset_px: signal.offset_px.round() as i32,
            viewports: (signal.viewports() * 100.0).round() / 100.0,
        });

        RigFrame {
            signal,
            figure,
            panel,
            tunnel,
            card_advances,
            readout,
        }
    }
}
