//! The re-armable one-shot trigger latch.
//!
//! Discrete side effects (advancing the card carousel) hang off a
//! continuous timeline. The sequencer is a small explicit state machine —
//! states `Armed(k)` for each threshold index — so the "fire exactly once
//! per crossing" guarantee lives in one testable place instead of a
//! mutable counter buried in a rendering callback.

use crate::error::RigError;
use crate::options::TriggerOptions;

/// Latch state machine over an ascending threshold sequence.
///
/// On each observation, every still-armed threshold the timeline now
/// exceeds fires once and the latch advances past it. The latch index is
/// the single source of truth for "have we already fired threshold k":
/// redundant observations within the same frame fire nothing. Falling
/// back below the rearm bound resets the latch so scrolling up and back
/// down replays the whole sequence.
#[derive(Debug, Clone)]
pub struct TriggerSequencer {
    thresholds: Vec<f32>,
    rearm_below: f32,
    /// Index of the next armed threshold. `thresholds.len()` when
    /// exhausted.
    armed: usize,
}

impl TriggerSequencer {
    /// Build a sequencer from validated options.
    pub fn new(options: &TriggerOptions) -> Result<Self, RigError> {
        options.validate()?;
        Ok(Self {
            thresholds: options.thresholds.clone(),
            rearm_below: options.rearm_below,
            armed: 0,
        })
    }

    /// Index of the next threshold that will fire.
    #[must_use]
    pub fn armed_index(&self) -> usize {
        self.armed
    }

    /// Observe one timeline value; returns how many thresholds fired.
    ///
    /// Thresholds are strictly ascending, so a large jump (e.g. a scroll
    /// anchor landing past several thresholds at once) fires each skipped
    /// threshold exactly once, in order.
    pub fn observe(&mut self, timeline: f32) -> usize {
        if timeline < self.rearm_below {
            if self.armed > 0 {
                log::debug!(
                    "trigger latch re-armed at timeline {timeline:.2}"
                );
            }
            self.armed = 0;
            return 0;
        }

        let mut fired = 0;
        while self.armed < self.thresholds.len()
            && timeline > self.thresholds[self.armed]
        {
            log::debug!(
                "trigger {} fired at timeline {timeline:.2} (threshold {})",
                self.armed,
                self.thresholds[self.armed]
            );
            self.armed += 1;
            fired += 1;
        }
        fired
    }

    /// Reset the latch to the fully armed state.
    pub fn reset(&mut self) {
        self.armed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer() -> TriggerSequencer {
        TriggerSequencer::new(&TriggerOptions::default()).unwrap()
    }

    #[test]
    fn test_fires_in_order_on_ascending_sweep() {
        let mut seq = sequencer();
        let mut total = 0;
        // Monotonically increasing timeline crossing 1.3 then 1.8.
        for t in [0.0, 0.5, 1.0, 1.2, 1.4, 1.6, 1.9, 2.2, 2.5] {
            total += seq.observe(t);
        }
        assert_eq!(total, 2);
        assert_eq!(seq.armed_index(), 2);
    }

    #[test]
    fn test_no_refire_on_redundant_observations() {
        let mut seq = sequencer();
        assert_eq!(seq.observe(1.5), 1);
        // Same frame evaluated twice — the latch must hold.
        assert_eq!(seq.observe(1.5), 0);
        assert_eq!(seq.observe(1.5), 0);
    }

    #[test]
    fn test_rearm_replays_sequence() {
        let mut seq = sequencer();
        // Rise to 1.5: first threshold fires.
        assert_eq!(seq.observe(1.5), 1);
        // Fall back below the rearm bound.
        assert_eq!(seq.observe(0.9), 0);
        assert_eq!(seq.armed_index(), 0);
        // Rise again to 1.5: fires again — twice total, once per crossing.
        assert_eq!(seq.observe(1.5), 1);
    }

    #[test]
    fn test_jump_fires_skipped_thresholds_once_each() {
        let mut seq = sequencer();
        // A single observation past both thresholds fires both, in order.
        assert_eq!(seq.observe(2.4), 2);
        assert_eq!(seq.observe(2.4), 0);
    }

    #[test]
    fn test_between_rearm_and_first_threshold_holds() {
        let mut seq = sequencer();
        assert_eq!(seq.observe(1.5), 1);
        // 1.1 is above the rearm bound but below the fired threshold:
        // neither a re-arm nor a fire.
        assert_eq!(seq.observe(1.1), 0);
        assert_eq!(seq.armed_index(), 1);
        // Second threshold still fires from here.
        assert_eq!(seq.observe(1.9), 1);
    }

    #[test]
    fn test_exact_threshold_value_does_not_fire() {
        let mut seq = sequencer();
        // Firing requires timeline strictly above the threshold.
        assert_eq!(seq.observe(1.3), 0);
        assert_eq!(seq.observe(1.300_1), 1);
    }

    #[test]
    fn test_reset_rearms() {
        let mut seq = sequencer();
        let _ = seq.observe(2.5);
        assert_eq!(seq.armed_index(), 2);
        seq.reset();
        assert_eq!(seq.armed_index(), 0);
        assert_eq!(seq.observe(1.4), 1);
    }

    #[test]
    fn test_rejects_descending_thresholds() {
        let options = TriggerOptions {
            thresholds: vec![1.8, 1.3],
            rearm_below: 1.0,
        };
        assert!(TriggerSequencer::new(&options).is_err());
    }

    #[test]
    fn test_rejects_threshold_at_rearm_bound() {
        let options = TriggerOptions {
            thresholds: vec![1.0, 1.8],
            rearm_below: 1.0,
        };
        assert!(TriggerSequencer::new(&options).is_err());
    }
}
