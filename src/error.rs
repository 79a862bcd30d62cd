//! Crate-level error types.

use std::fmt;

/// Errors produced by the scrollrig crate.
///
/// Every variant is a configuration-time failure. The per-frame pipeline
/// itself is total: once a [`Rig`](crate::rig::Rig) has been constructed
/// from validated options, evaluation cannot fail.
#[derive(Debug)]
pub enum RigError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A phase range with a non-positive or non-finite span.
    InvalidRange {
        /// Start of the offending range, in scroll pixels.
        start_px: f32,
        /// End of the offending range, in scroll pixels.
        end_px: f32,
    },
    /// Trigger thresholds that are empty, non-ascending, or not above the
    /// rearm bound.
    InvalidThresholds(String),
    /// Any other out-of-domain option value.
    InvalidOption(String),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidRange { start_px, end_px } => {
                write!(
                    f,
                    "invalid phase range: {start_px}px..{end_px}px \
                     (span must be positive and finite)"
                )
            }
            Self::InvalidThresholds(msg) => {
                write!(f, "invalid trigger thresholds: {msg}")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
