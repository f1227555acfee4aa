//! Error types for tessera-range

use crate::DataType;
use thiserror::Error;

/// Errors raised while building or querying a range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Single-value range with both bounds excluded
    #[error("empty point range at {value}: at least one bound must be included")]
    EmptyPoint { value: String },

    /// One bound is NaN and the other is not
    #[error("invalid range bounds {min}..{max}: NaN is only valid as the value of a point range")]
    MixedNaN { min: String, max: String },

    /// Containment query with a sample type the range was not built for
    #[error("unsupported operation: {query} lookup on a {range} range")]
    UnsupportedDomain { range: DataType, query: DataType },
}

/// Result type for range operations
pub type RangeResult<T> = Result<T, RangeError>;
