use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Breakpoints and pose constants for the figure rig.
///
/// Defaults reproduce the hand-tuned landing-page values: the figure
/// appears 300px into the scroll, reaches full size at 1500px, and hides
/// again once the panel section has scrolled past (5.5 viewport heights).
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct FigureOptions {
    /// Offset at which the figure becomes visible and starts growing.
    pub appear_start_px: f32,
    /// Offset at which the figure reaches full size, centered.
    pub fully_expanded_px: f32,
    /// Hide threshold expressed in viewport heights, so it tracks resizes.
    pub disappear_viewports: f32,
    /// Scale of the fully expanded figure.
    pub base_scale: f32,
    /// Horizontal position at the start of the entrance slide.
    pub entry_x: f32,
    /// Vertical resting position, held through the whole visible range.
    pub rest_y: f32,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            appear_start_px: 300.0,
            fully_expanded_px: 1500.0,
            disappear_viewports: 5.5,
            base_scale: 450.0,
            entry_x: -3.5,
            rest_y: -1.0,
        }
    }
}

impl FigureOptions {
    /// Check the expansion range and scale for out-of-domain values.
    pub fn validate(&self) -> Result<(), RigError> {
        if !self.appear_start_px.is_finite()
            || !self.fully_expanded_px.is_finite()
            || self.fully_expanded_px <= self.appear_start_px
        {
            return Err(RigError::InvalidRange {
                start_px: self.appear_start_px,
                end_px: self.fully_expanded_px,
            });
        }
        if !(self.disappear_viewports.is_finite()
            && self.disappear_viewports > 0.0)
        {
            return Err(RigError::InvalidOption(format!(
                "figure.disappear_viewports must be positive, got {}",
                self.disappear_viewports
            )));
        }
        if !(self.base_scale.is_finite() && self.base_scale > 0.0) {
            return Err(RigError::InvalidOption(format!(
                "figure.base_scale must be positive, got {}",
                self.base_scale
            )));
        }
        if !self.entry_x.is_finite() {
            return Err(RigError::InvalidOption(format!(
                "figure.entry_x must be finite, got {}",
                self.entry_x
            )));
        }
        if !self.rest_y.is_finite() {
            return Err(RigError::InvalidOption(format!(
                "figure.rest_y must be finite, got {}",
                self.rest_y
            )));
        }
        Ok(())
    }
}
