use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Card-swap trigger configuration, on the panel's stretched timeline.
///
/// The 1.3 / 1.8 thresholds and the 1.0 rearm bound are preserved
/// hand-tuned constants from the original layout, with no derivation
/// behind them.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct TriggerOptions {
    /// Ascending timeline values at which the card swap fires, one shot
    /// each.
    pub thresholds: Vec<f32>,
    /// Timeline value below which every fired threshold re-arms, so
    /// scrolling back up and down replays the sequence.
    pub rearm_below: f32,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            thresholds: vec![1.3, 1.8],
            rearm_below: 1.0,
        }
    }
}

impl TriggerOptions {
    /// Check that the thresholds form a usable ascending sequence above
    /// the rearm bound.
    pub fn validate(&self) -> Result<(), RigError> {
        if self.thresholds.is_empty() {
            return Err(RigError::InvalidThresholds(
                "threshold list is empty".to_owned(),
            ));
        }
        if !self.rearm_below.is_finite() {
            return Err(RigError::InvalidThresholds(format!(
                "rearm bound {} is not finite",
                self.rearm_below
            )));
        }
        let mut prev = self.rearm_below;
        for (i, &t) in self.thresholds.iter().enumerate() {
            if !t.is_finite() || t <= prev {
                return Err(RigError::InvalidThresholds(format!(
                    "threshold[{i}] = {t} must be finite and above {prev}"
                )));
            }
            prev = t;
        }
        Ok(())
    }
}
