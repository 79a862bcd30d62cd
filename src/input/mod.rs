//! Viewport input: event types and the scroll sampler that folds them
//! into a single latest-wins signal.

/// Platform-agnostic viewport events.
pub mod event;
/// Latest-wins scroll/resize sampling.
pub mod sampler;

pub use event::ViewportEvent;
pub use sampler::{ScrollSampler, ScrollSignal};
