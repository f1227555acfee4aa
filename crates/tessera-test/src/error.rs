//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while checking regression results
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Slice comparison failed on length
    #[error("slice comparison failed at index {index}: expected {expected} values, got {actual}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}
