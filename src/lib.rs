// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Phase math: comparisons against exact breakpoint values are intended
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]

//! Scroll-driven presentation state pipeline.
//!
//! Scrollrig turns a continuous scroll offset into coordinated visual state
//! for a single-page scrolling experience: a figure rig that grows and
//! slides to center, a pill that expands into a full-viewport panel, a 3D
//! tunnel that travels toward a white flash, and a latched trigger sequence
//! that advances a card carousel at fixed points on the timeline.
//!
//! The crate owns none of the painting. Every frame it derives plain
//! numeric properties (scale, position, opacity, corner radius) from one
//! consistent snapshot of the scroll offset and hands them to a
//! [`surface::RenderSurface`] implementation, which is responsible for the
//! actual DOM styles, 3D transforms, or canvas draws.
//!
//! # Key entry points
//!
//! - [`rig::Rig`] - the per-frame controller tying everything together
//! - [`input::ScrollSampler`] - latest-wins viewport sampling
//! - [`options::RigOptions`] - runtime configuration with TOML presets
//! - [`sequencer::TriggerSequencer`] - the re-armable one-shot latch
//!
//! # Two timing domains
//!
//! Scroll and resize notifications arrive at irregular, browser-determined
//! intervals and do O(1) bookkeeping only ([`rig::Rig::handle_event`]).
//! All derivation happens on the repaint tick ([`rig::Rig::frame`]), gated
//! to the display refresh cadence by [`util::frame_timing::FramePacer`].
//! Mixing the two is the primary jank risk this design avoids.

pub mod drivers;
pub mod error;
pub mod input;
pub mod options;
pub mod phase;
pub mod rig;
pub mod sequencer;
pub mod surface;
pub mod util;

pub use error::RigError;
pub use input::{ScrollSampler, ScrollSignal, ViewportEvent};
pub use rig::{Rig, RigFrame};
