//! Phase mapping: raw scroll offset to normalized section progress.
//!
//! Every visual section owns a [`PhaseRange`] of absolute scroll pixels.
//! Mapping is a pure clamp-and-normalize — identical input offset always
//! yields identical progress, independent of call order or prior history —
//! so drivers can re-derive their full state from scratch on every frame.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// A fixed breakpoint range over absolute scroll pixels.
///
/// The span is validated at construction so `end_px - start_px` can never
/// be zero at evaluation time — a zero-length range is a configuration
/// error, not a runtime condition to recover from.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
pub struct PhaseRange {
    /// Offset at which progress leaves 0.
    pub start_px: f32,
    /// Offset at which progress reaches 1.
    pub end_px: f32,
}

impl PhaseRange {
    /// Create a validated range. Fails unless both endpoints are finite
    /// and `end_px > start_px`.
    pub fn new(start_px: f32, end_px: f32) -> Result<Self, RigError> {
        if !start_px.is_finite() || !end_px.is_finite() || end_px <= start_px
        {
            return Err(RigError::InvalidRange { start_px, end_px });
        }
        Ok(Self { start_px, end_px })
    }

    /// Construct without validation. Only for compile-time constants whose
    /// span is known-good.
    pub(crate) const fn new_unchecked(start_px: f32, end_px: f32) -> Self {
        Self { start_px, end_px }
    }

    /// Span of the range in pixels. Always positive for validated ranges.
    #[must_use]
    pub fn span_px(self) -> f32 {
        self.end_px - self.start_px
    }

    /// Normalized progress of `offset_px` through the range.
    ///
    /// Offsets outside `[start_px, end_px]` clamp rather than extrapolate,
    /// so the result is always in [0, 1]. Monotonically non-decreasing in
    /// `offset_px`.
    #[inline]
    #[must_use]
    pub fn progress(self, offset_px: f32) -> f32 {
        ((offset_px - self.start_px) / self.span_px()).clamp(0.0, 1.0)
    }

    /// Progress scaled onto an expanded timeline.
    ///
    /// A `scale` greater than 1 lets one continuous scroll range sequence
    /// multiple discrete events: the clamped ratio is stretched so that
    /// downstream thresholds can be chosen past 1 (e.g. fire at 1.3, fire
    /// again at 1.8). The result is in [0, scale].
    #[inline]
    #[must_use]
    pub fn timeline(self, offset_px: f32, scale: f32) -> f32 {
        self.progress(offset_px) * scale
    }
}
