//! Centralized pipeline options with TOML preset support.
//!
//! All tweakable constants (breakpoints, timeline scaling, trigger
//! thresholds, frame pacing, debug toggles) are consolidated here. Options
//! serialize to/from TOML for presets, and every value that can make the
//! per-frame math partial (zero-length ranges, non-ascending thresholds)
//! is validated up front so evaluation never has to check.

mod debug;
mod figure;
mod frame;
mod panel;
mod triggers;
mod tunnel;

use std::path::Path;

pub use debug::DebugOptions;
pub use figure::FigureOptions;
pub use frame::FrameOptions;
pub use panel::PanelOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use triggers::TriggerOptions;
pub use tunnel::TunnelOptions;

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[triggers]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct RigOptions {
    /// Figure rig breakpoints and pose constants.
    pub figure: FigureOptions,
    /// Expanding panel range, timeline scaling, and easing.
    pub panel: PanelOptions,
    /// Tunnel depth/flash breakpoints.
    pub tunnel: TunnelOptions,
    /// Card-swap trigger thresholds.
    pub triggers: TriggerOptions,
    /// Repaint tick pacing.
    pub frame: FrameOptions,
    /// Debug overlays.
    pub debug: DebugOptions,
}

impl RigOptions {
    /// Generate JSON Schema describing the exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(RigOptions)
    }

    /// Check every sub-section for out-of-domain values.
    ///
    /// Returns the first configuration error found. A validated options
    /// set is guaranteed to construct a [`Rig`](crate::rig::Rig) whose
    /// per-frame evaluation is total.
    pub fn validate(&self) -> Result<(), RigError> {
        self.figure.validate()?;
        self.panel.validate()?;
        self.tunnel.validate()?;
        self.triggers.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults; the
    /// result is validated before being returned.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::info!("loaded rig options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
