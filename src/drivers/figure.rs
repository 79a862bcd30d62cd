//! Entrance/exit choreography for the 3D figure rig.

use glam::Vec3;

use crate::error::RigError;
use crate::input::ScrollSignal;
use crate::options::FigureOptions;
use crate::phase::PhaseRange;

/// Renderable pose for the figure rig, derived fresh each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigurePose {
    /// Whether the figure should be drawn at all. When `false` the other
    /// fields are neutral and carry no meaning.
    pub visible: bool,
    /// Uniform scale factor.
    pub scale: f32,
    /// World-space position.
    pub position: Vec3,
    /// Euler rotation. Always zero — the pose resets it every frame so no
    /// external perturbation can leave the figure spinning.
    pub rotation: Vec3,
}

impl FigurePose {
    /// The hidden pose: invisible, neutral transform.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            scale: 0.0,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }
}

/// Maps scroll offset to the figure's pose.
///
/// Three regimes over the offset domain:
/// 1. Below `appear_start` or past the disappear threshold: hidden.
/// 2. Between `appear_start` and `fully_expanded`: scale grows 0 to
///    `base_scale` and x slides `entry_x` to 0, linear in progress.
/// 3. At or past `fully_expanded` (while still visible): locked at the
///    full-size centered pose, idempotent no matter how far the offset
///    runs on.
#[derive(Debug, Clone)]
pub struct FigureRigDriver {
    expand: PhaseRange,
    disappear_viewports: f32,
    base_scale: f32,
    entry_x: f32,
    rest_y: f32,
}

impl FigureRigDriver {
    /// Build a driver from validated options.
    pub fn new(options: &FigureOptions) -> Result<Self, RigError> {
        options.validate()?;
        Ok(Self {
            expand: PhaseRange::new(
                options.appear_start_px,
                options.fully_expanded_px,
            )?,
            disappear_viewports: options.disappear_viewports,
            base_scale: options.base_scale,
            entry_x: options.entry_x,
            rest_y: options.rest_y,
        })
    }

    /// Offset past which the figure hides, for the signal's viewport.
    #[must_use]
    pub fn disappear_px(&self, signal: ScrollSignal) -> f32 {
        signal.viewport_height_px * self.disappear_viewports
    }

    /// The locked full-size centered pose.
    fn locked_pose(&self) -> FigurePose {
        FigurePose {
            visible: true,
            scale: self.base_scale,
            position: Vec3::new(0.0, self.rest_y, 0.0),
            rotation: Vec3::ZERO,
        }
    }

    /// Derive the pose for one scroll snapshot.
    #[must_use]
    pub fn evaluate(&self, signal: ScrollSignal) -> FigurePose {
        let offset = signal.offset_px;

        // Hidden before the entrance and after the section scrolls past.
        if offset < self.expand.start_px
            || offset > self.disappear_px(signal)
        {
            return FigurePose::hidden();
        }

        if offset >= self.expand.end_px {
            return self.locked_pose();
        }

        let p = self.expand.progress(offset);
        FigurePose {
            visible: true,
            scale: p * self.base_scale,
            position: Vec3::new(
                self.entry_x * (1.0 - p),
                self.rest_y,
                0.0,
            ),
            rotation: Vec3::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> FigureRigDriver {
        FigureRigDriver::new(&FigureOptions::default())
            .unwrap()
    }

    fn signal(offset_px: f32) -> ScrollSignal {
        ScrollSignal {
            offset_px,
            viewport_height_px: 800.0,
        }
    }

    #[test]
    fn test_hidden_before_appear_start() {
        let driver = driver();
        for offset in [0.0, 150.0, 299.9] {
            assert!(!driver.evaluate(signal(offset)).visible);
        }
    }

    #[test]
    fn test_hidden_after_disappear() {
        let driver = driver();
        // 5.5 viewports at 800px = 4400px
        assert!(!driver.evaluate(signal(4400.1)).visible);
        assert!(!driver.evaluate(signal(9000.0)).visible);
        // Still visible right at the threshold
        assert!(driver.evaluate(signal(4400.0)).visible);
    }

    #[test]
    fn test_midpoint_scale_and_slide() {
        let driver = driver();
        // (900 - 300) / (1500 - 300) = 0.5
        let pose = driver.evaluate(signal(900.0));
        assert!(pose.visible);
        assert!((pose.scale - 225.0).abs() < 1e-3);
        assert!((pose.position.x - (-1.75)).abs() < 1e-4);
        assert_eq!(pose.position.y, -1.0);
    }

    #[test]
    fn test_scale_boundaries() {
        let driver = driver();
        assert!(driver.evaluate(signal(300.0)).scale.abs() < 1e-6);
        assert!(
            (driver.evaluate(signal(1500.0)).scale - 450.0).abs() < 1e-3
        );
    }

    #[test]
    fn test_scale_monotonic_through_expansion() {
        let driver = driver();
        let mut prev = -1.0;
        for i in 0..=120 {
            let offset = 300.0 + i as f32 * 10.0;
            let pose = driver.evaluate(signal(offset));
            assert!(pose.scale >= prev, "scale regressed at {offset}");
            prev = pose.scale;
        }
    }

    #[test]
    fn test_locked_pose_is_idempotent() {
        let driver = driver();
        let locked = driver.evaluate(signal(1500.0));
        for offset in [1500.0, 2000.0, 3000.0, 4399.0] {
            assert_eq!(driver.evaluate(signal(offset)), locked);
        }
        assert_eq!(locked.scale, 450.0);
        assert_eq!(locked.position, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_rotation_always_neutral() {
        let driver = driver();
        for offset in [0.0, 500.0, 900.0, 1500.0, 3000.0, 5000.0] {
            assert_eq!(
                driver.evaluate(signal(offset)).rotation,
                Vec3::ZERO
            );
        }
    }

    #[test]
    fn test_disappear_tracks_viewport_height() {
        let driver = driver();
        let tall = ScrollSignal {
            offset_px: 5000.0,
            viewport_height_px: 1000.0,
        };
        // 5.5 * 1000 = 5500, so 5000 is still inside the visible range.
        assert!(driver.evaluate(tall).visible);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let bad = FigureOptions {
            appear_start_px: 1500.0,
            fully_expanded_px: 300.0,
            ..FigureOptions::default()
        };
        assert!(FigureRigDriver::new(&bad).is_err());
    }

    #[test]
    fn test_rejects_non_finite_pose_constants() {
        let bad_x = FigureOptions {
            entry_x: f32::NAN,
            ..FigureOptions::default()
        };
        assert!(FigureRigDriver::new(&bad_x).is_err());

        let bad_y = FigureOptions {
            rest_y: f32::INFINITY,
            ..FigureOptions::default()
        };
        assert!(FigureRigDriver::new(&bad_y).is_err());
    }
}
