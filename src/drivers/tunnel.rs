//! Tunnel depth travel and white-flash handoff.

use crate::error::RigError;
use crate::input::ScrollSignal;
use crate::options::TunnelOptions;

/// Which of the three tunnel regimes an offset falls in.
///
/// The regimes partition the offset domain: `[0, depth_end)` is depth
/// travel, `[depth_end, flash_end)` is the flash fade, and everything at
/// or past `flash_end` holds the flash at full. No gap, no overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunnelPhase {
    /// Travelling through the tunnel; flash not yet started.
    Depth,
    /// Flash fading in while the tunnel fades out.
    Flash,
    /// Flash held at full; tunnel fully faded.
    Held,
}

/// Renderable tunnel state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TunnelView {
    /// Which regime produced this view.
    pub phase: TunnelPhase,
    /// Camera-space depth translation.
    pub depth_z: f32,
    /// Opacity of the tunnel walls, in [0, 1].
    pub tunnel_opacity: f32,
    /// Opacity of the white flash overlay, in [0, 1].
    pub flash_opacity: f32,
}

/// Maps scroll offset to the tunnel's depth and flash state.
#[derive(Debug, Clone)]
pub struct TunnelDriver {
    depth_end_px: f32,
    flash_end_px: f32,
    flash_length_px: f32,
    depth_near_z: f32,
    depth_travel_z: f32,
}

impl TunnelDriver {
    /// Build a driver from validated options.
    pub fn new(options: &TunnelOptions) -> Result<Self, RigError> {
        options.validate()?;
        Ok(Self {
            depth_end_px: options.depth_end_px,
            flash_end_px: options.flash_end_px(),
            flash_length_px: options.flash_length_px,
            depth_near_z: options.depth_near_z,
            depth_travel_z: options.depth_travel_z,
        })
    }

    /// Depth at the far end of the travel, held through flash and beyond.
    fn depth_far_z(&self) -> f32 {
        self.depth_near_z + self.depth_travel_z
    }

    /// Derive the tunnel view for one scroll snapshot.
    #[must_use]
    pub fn evaluate(&self, signal: ScrollSignal) -> TunnelView {
        let offset = signal.offset_px;

        if offset < self.depth_end_px {
            let p = offset / self.depth_end_px;
            return TunnelView {
                phase: TunnelPhase::Depth,
                depth_z: self.depth_near_z + p * self.depth_travel_z,
                tunnel_opacity: 1.0,
                flash_opacity: 0.0,
            };
        }

        if offset < self.flash_end_px {
            let flash = (offset - self.depth_end_px) / self.flash_length_px;
            return TunnelView {
                phase: TunnelPhase::Flash,
                depth_z: self.depth_far_z(),
                tunnel_opacity: 1.0 - flash,
                flash_opacity: flash,
            };
        }

        TunnelView {
            phase: TunnelPhase::Held,
            depth_z: self.depth_far_z(),
            tunnel_opacity: 0.0,
            flash_opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> TunnelDriver {
        TunnelDriver::new(&TunnelOptions::default()).unwrap()
    }

    fn signal(offset_px: f32) -> ScrollSignal {
        ScrollSignal {
            offset_px,
            viewport_height_px: 800.0,
        }
    }

    #[test]
    fn test_minimum_depth_at_rest() {
        let view = driver().evaluate(signal(0.0));
        assert_eq!(view.phase, TunnelPhase::Depth);
        assert_eq!(view.depth_z, -50.0);
        assert_eq!(view.tunnel_opacity, 1.0);
        assert_eq!(view.flash_opacity, 0.0);
    }

    #[test]
    fn test_flash_starts_at_zero_on_boundary() {
        // Offset 9000 is the first flash-phase offset: depth is at its
        // maximum (-50 + 1500 = 1450) and the flash begins at exactly 0.
        let view = driver().evaluate(signal(9000.0));
        assert_eq!(view.phase, TunnelPhase::Flash);
        assert_eq!(view.depth_z, 1450.0);
        assert_eq!(view.flash_opacity, 0.0);
        assert_eq!(view.tunnel_opacity, 1.0);
    }

    #[test]
    fn test_flash_midpoint() {
        // Midpoint of the 726px window: 9000 + 363 = 9363.
        let view = driver().evaluate(signal(9363.0));
        assert_eq!(view.phase, TunnelPhase::Flash);
        assert!((view.flash_opacity - 0.5).abs() < 1e-4);
        assert!((view.tunnel_opacity - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_flash_holds_at_full() {
        let driver = driver();
        for offset in [9726.0, 10_000.0, 50_000.0] {
            let view = driver.evaluate(signal(offset));
            assert_eq!(view.phase, TunnelPhase::Held);
            assert_eq!(view.flash_opacity, 1.0);
            assert_eq!(view.tunnel_opacity, 0.0);
        }
    }

    #[test]
    fn test_phases_partition_offset_domain() {
        let driver = driver();
        // Sweep across every regime and both boundaries: each offset must
        // land in exactly one phase.
        for i in 0..=1200 {
            let offset = i as f32 * 10.0;
            let view = driver.evaluate(signal(offset));
            let expected = if offset < 9000.0 {
                TunnelPhase::Depth
            } else if offset < 9726.0 {
                TunnelPhase::Flash
            } else {
                TunnelPhase::Held
            };
            assert_eq!(view.phase, expected, "at offset {offset}");
        }
    }

    #[test]
    fn test_depth_interpolates_linearly() {
        let driver = driver();
        let half = driver.evaluate(signal(4500.0));
        assert!((half.depth_z - 700.0).abs() < 1e-3); // -50 + 0.5 * 1500
        let mut prev = f32::MIN;
        for i in 0..=900 {
            let view = driver.evaluate(signal(i as f32 * 10.0));
            assert!(view.depth_z >= prev);
            prev = view.depth_z;
        }
    }
}
