//! Shared utilities for the scroll pipeline.
//!
//! Helpers for easing curves and repaint-tick pacing.

pub mod easing;
pub mod frame_timing;
