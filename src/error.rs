//! Error types for papercheck.

/// Errors raised while validating a similarity configuration.
///
/// Every comparison on a valid configuration returns a [`Score`](crate::Score);
/// these errors only describe settings that can never work.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap reaches or exceeds a chunk size.
    #[error("overlap {overlap} must be smaller than chunk size {size}")]
    OverlapExceedsSize {
        /// The chunk size.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },

    /// Invalid k-gram size (must be > 0).
    #[error("invalid k-gram size: {0} (must be > 0)")]
    InvalidKgramSize(usize),

    /// Exact-match ceiling of zero.
    #[error("invalid exact-match ceiling: {0} (must be > 0)")]
    InvalidLengthCeiling(usize),

    /// Zero copied chunks compared per original chunk.
    #[error("invalid chunk comparison cap: {0} (must be > 0)")]
    InvalidComparisonCap(usize),

    /// Maximum text length of zero.
    #[error("invalid maximum text length: {0} (must be > 0)")]
    InvalidTextLength(usize),

    /// A fraction or weight outside its allowed range.
    #[error("invalid value for {name}: {value}")]
    InvalidThreshold {
        /// Which setting was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type for papercheck operations.
pub type Result<T> = std::result::Result<T, Error>;
