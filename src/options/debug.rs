use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug visualization toggles.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Emit a per-frame scroll readout (pixel offset and viewport ratio)
    /// alongside the derived visual state, for an on-screen overlay.
    pub scroll_readout: bool,
}
