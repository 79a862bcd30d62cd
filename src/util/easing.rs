//! Easing functions for scroll-phase interpolation.
//!
//! Provides the curves used to shape clamped phase progress before it is
//! mapped to visual properties. All functions are cheap enough to evaluate
//! once per driver per frame without caching.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out (slow start, fast middle, slow end).
    /// Formula: `t < 0.5: 2t²; else: 1 - (-2t + 2)²/2`
    QuadraticInOut,
}

impl EasingFunction {
    /// Default easing function: QuadraticInOut, matching the panel
    /// expansion's smoothed response.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        // Clamp input to [0, 1]
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let omt = -2.0 * t + 2.0;
                    1.0 - omt * omt / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_out_boundaries() {
        let inout = EasingFunction::QuadraticInOut;
        assert_eq!(inout.evaluate(0.0), 0.0);
        assert_eq!(inout.evaluate(0.5), 0.5);
        assert!((inout.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_in_out_shape() {
        // Slow start: value at t=0.25 should lag the linear diagonal.
        let inout = EasingFunction::QuadraticInOut;
        let early = inout.evaluate(0.25);
        assert!(early < 0.25, "ease-in-out should lag at t=0.25, got {early}");
        // Symmetric fast finish: value at t=0.75 should lead.
        let late = inout.evaluate(0.75);
        assert!(late > 0.75, "ease-in-out should lead at t=0.75, got {late}");
        // Point symmetry around (0.5, 0.5).
        assert!((early + late - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;

        // Test negative input clamps to 0
        assert_eq!(linear.evaluate(-0.5), 0.0);

        // Test input > 1 clamps to 1
        assert_eq!(linear.evaluate(1.5), 1.0);

        // Also test with the in-out curve
        let inout = EasingFunction::QuadraticInOut;
        assert_eq!(inout.evaluate(-0.5), 0.0);
        assert!((inout.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = EasingFunction::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.0), 0.0);
        assert_eq!(quad_in.evaluate(0.5), 0.25); // 0.5² = 0.25
        assert_eq!(quad_in.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_default_is_quadratic_in_out() {
        let default_easing = EasingFunction::default();
        assert_eq!(default_easing, EasingFunction::DEFAULT);
        assert_eq!(default_easing, EasingFunction::QuadraticInOut);
    }

    #[test]
    fn test_monotonic_over_unit_interval() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::QuadraticIn,
            EasingFunction::QuadraticOut,
            EasingFunction::QuadraticInOut,
        ] {
            let mut prev = easing.evaluate(0.0);
            for i in 1..=100 {
                let t = i as f32 / 100.0;
                let v = easing.evaluate(t);
                assert!(
                    v >= prev,
                    "{easing:?} not monotonic at t={t}: {v} < {prev}"
                );
                prev = v;
            }
        }
    }
}
