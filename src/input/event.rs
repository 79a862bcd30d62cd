/// Platform-agnostic viewport events.
///
/// These are fed into a [`ScrollSampler`](super::ScrollSampler) which
/// folds them into the current [`ScrollSignal`](super::ScrollSignal).
/// The embedding shell (browser glue, native window loop) is responsible
/// for translating its own scroll/resize notifications into these values.
///
/// # Example
///
/// ```
/// use scrollrig::{ScrollSampler, ViewportEvent};
///
/// let mut sampler = ScrollSampler::new();
/// sampler.handle_event(ViewportEvent::Scrolled { offset_px: 420.0 });
/// assert_eq!(sampler.signal().offset_px, 420.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// The page scrolled to an absolute vertical offset.
    Scrolled {
        /// Scroll offset from the top of the page, in pixels.
        offset_px: f32,
    },
    /// The viewport was resized.
    Resized {
        /// Visible viewport height, in pixels.
        viewport_height_px: f32,
    },
}
