//! Thin adapter between derived properties and whatever paints them.
//!
//! All scroll math lives in pure driver functions; the only thing a
//! rendering integration implements is this trait. That keeps the math
//! testable without a DOM, a 3D context, or a canvas — tests drive the
//! rig against a recording double instead.

use crate::drivers::{FigurePose, PanelFrame, TunnelView};
use crate::rig::RigFrame;

/// Receives one frame's worth of derived visual properties.
///
/// Implementations write DOM styles, 3D transforms, or canvas state.
/// They must not feed anything back into the pipeline — properties flow
/// one way, from scroll snapshot to paint.
pub trait RenderSurface {
    /// Apply the figure rig's pose (scale, position, rotation,
    /// visibility).
    fn apply_figure(&mut self, pose: &FigurePose);

    /// Apply the expanding panel's geometry and overlay opacities.
    fn apply_panel(&mut self, frame: &PanelFrame);

    /// Apply the tunnel's depth translation and flash opacity.
    fn apply_tunnel(&mut self, view: &TunnelView);

    /// Advance the card carousel to its next visual. Called once per
    /// fired trigger threshold.
    fn advance_card(&mut self);
}

/// Push a derived frame out to a surface.
///
/// Property application happens in dependency order (figure, panel,
/// tunnel), then the card carousel is advanced once per trigger that
/// fired during this frame's sequencer observation.
pub fn apply<S: RenderSurface>(frame: &RigFrame, surface: &mut S) {
    surface.apply_figure(&frame.figure);
    surface.apply_panel(&frame.panel);
    surface.apply_tunnel(&frame.tunnel);
    for _ in 0..frame.card_advances {
        surface.advance_card();
    }
}
