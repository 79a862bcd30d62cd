//! Animation drivers: pure `ScrollSignal -> properties` mappings.
//!
//! Each driver owns its section's breakpoints and derives a full property
//! set from scratch every repaint tick — no incremental state, so a frame
//! can never mix a fresh offset with stale derived values.

mod figure;
mod panel;
mod tunnel;

pub use figure::{FigurePose, FigureRigDriver};
pub use panel::{PanelDriver, PanelFrame};
pub use tunnel::{TunnelDriver, TunnelPhase, TunnelView};
