use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Repaint tick pacing options.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct FrameOptions {
    /// Target frames per second for the derivation tick (0 = unlimited,
    /// i.e. derive on every caller tick).
    pub target_fps: u32,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}
