//! Error types for tessera-classify

use thiserror::Error;

/// Errors that can occur while classifying samples
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Range construction or query error
    #[error("range error: {0}")]
    Range(#[from] tessera_range::RangeError),

    /// Method name outside the supported set
    #[error("unknown classification method: {0}")]
    UnknownMethod(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Band index past the classification's band count
    #[error("band {band} out of range for {bands} band(s)")]
    BandOutOfRange { band: usize, bands: usize },

    /// Accumulators that cannot be merged
    #[error("incompatible classification: {0}")]
    IncompatibleClassification(String),

    /// Sample buffer does not match the declared layout
    #[error("sample buffer holds {actual} values, expected {width}x{height}x{bands}")]
    SampleCount {
        actual: usize,
        width: usize,
        height: usize,
        bands: usize,
    },
}

/// Result type for classification operations
pub type ClassifyResult<T> = Result<T, ClassifyError>;
