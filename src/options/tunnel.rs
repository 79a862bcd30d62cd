use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Tunnel depth/flash breakpoints.
///
/// The tunnel travels for the first 9000px of its section, then a white
/// flash fades in over the next 726px while the tunnel itself fades out,
/// and past 9726px the flash holds at full.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct TunnelOptions {
    /// Offset at which the depth travel ends and the flash begins.
    pub depth_end_px: f32,
    /// Length of the flash fade window, in pixels.
    pub flash_length_px: f32,
    /// Camera-space depth at offset 0.
    pub depth_near_z: f32,
    /// Total depth travelled across the depth phase.
    pub depth_travel_z: f32,
}

impl Default for TunnelOptions {
    fn default() -> Self {
        Self {
            depth_end_px: 9000.0,
            flash_length_px: 726.0,
            depth_near_z: -50.0,
            depth_travel_z: 1500.0,
        }
    }
}

impl TunnelOptions {
    /// Offset at which the flash reaches full and holds.
    #[must_use]
    pub fn flash_end_px(&self) -> f32 {
        self.depth_end_px + self.flash_length_px
    }

    /// Check both phase windows for zero or non-finite spans.
    pub fn validate(&self) -> Result<(), RigError> {
        if !(self.depth_end_px.is_finite() && self.depth_end_px > 0.0) {
            return Err(RigError::InvalidRange {
                start_px: 0.0,
                end_px: self.depth_end_px,
            });
        }
        if !(self.flash_length_px.is_finite() && self.flash_length_px > 0.0)
        {
            return Err(RigError::InvalidRange {
                start_px: self.depth_end_px,
                end_px: self.flash_end_px(),
            });
        }
        if !self.depth_near_z.is_finite() || !self.depth_travel_z.is_finite()
        {
            return Err(RigError::InvalidOption(
                "tunnel depth values must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
