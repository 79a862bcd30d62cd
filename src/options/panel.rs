use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;
use crate::phase::PhaseRange;
use crate::util::easing::EasingFunction;

/// Expanding panel configuration.
///
/// The default range matches the original layout: the pinned section
/// starts one viewport (800px) into the page and is scrollable for four
/// more (through 4000px). The 2.5x timeline scale is a preserved
/// hand-tuned constant — it stretches the clamped progress so the card
/// triggers at 1.3 and 1.8 fit after the expansion finishes at 1.0.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct PanelOptions {
    /// Absolute scroll range over which the panel section is pinned.
    pub range: PhaseRange,
    /// Timeline stretch factor applied to the clamped progress.
    pub timeline_scale: f32,
    /// Easing applied to the expansion (not to the timeline).
    pub easing: EasingFunction,
    /// Expansion value at which the panel snaps to exact full-screen
    /// literals instead of a near-100% interpolation.
    pub lock_threshold: f32,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            range: PhaseRange::new_unchecked(800.0, 4000.0),
            timeline_scale: 2.5,
            easing: EasingFunction::QuadraticInOut,
            lock_threshold: 0.99,
        }
    }
}

impl PanelOptions {
    /// Check the range, scale, and lock threshold for out-of-domain values.
    pub fn validate(&self) -> Result<(), RigError> {
        // Re-run PhaseRange's construction check on the deserialized value.
        let _ = PhaseRange::new(self.range.start_px, self.range.end_px)?;
        if !(self.timeline_scale.is_finite() && self.timeline_scale > 0.0) {
            return Err(RigError::InvalidOption(format!(
                "panel.timeline_scale must be positive, got {}",
                self.timeline_scale
            )));
        }
        if !(self.lock_threshold > 0.0 && self.lock_threshold <= 1.0) {
            return Err(RigError::InvalidOption(format!(
                "panel.lock_threshold must be in (0, 1], got {}",
                self.lock_threshold
            )));
        }
        Ok(())
    }
}
