use thiserror::Error;

/// Errors surfaced at component boundaries.
///
/// All variants are immediately-detectable precondition violations; none is
/// retryable. Out-of-range configuration is reported rather than clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed configuration value.
    #[error("invalid parameter {name}={value}: {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// Vectors of inconsistent length fed to an operation.
    #[error("shape mismatch: expected length {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Predict (or centroid access) invoked before fit.
    #[error("clusterer has not been fitted")]
    NotFitted,

    /// Fewer training vectors than the operation requires.
    #[error("insufficient data: need {needed}, have {available}")]
    InsufficientData { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
