use thiserror::Error;

/// Errors produced by rope construction and access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RopeError {
    /// Index access outside `[0, len)`. Raised for the empty rope as well.
    #[error("index {index} out of range for rope of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Substring range violating `0 <= lo <= hi <= len`.
    #[error("invalid range [{lo}, {hi}) for rope of length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    /// The sequence builder was handed zero segments.
    #[error("cannot build a rope from an empty sequence")]
    EmptySequence,
}
