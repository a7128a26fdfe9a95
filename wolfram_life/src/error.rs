// error.rs - Error types for the automaton core

use thiserror::Error;

/// Errors reported by the automaton core.
///
/// None of these are fatal: drivers are expected to log them and fall back to
/// the last configuration that worked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// Pattern index outside the rule table.
    #[error("pattern index {index} out of range for a {size}-entry rule table")]
    InvalidIndex { index: usize, size: usize },

    /// Grid with a zero dimension, or rows of unequal length.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Rule number with bits set above the table size (strict decoding only).
    #[error("rule {rule} does not fit in {bits} bits")]
    RuleOutOfRange { rule: u64, bits: usize },

    /// Unrecognised name in text configuration.
    #[error("unknown {kind}: {value:?}")]
    Parse { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, AutomatonError>;
