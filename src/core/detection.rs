/// Result of scoring a signal against a fitted shape dictionary.
///
/// Plain data, handed off as-is to whatever reporting or plotting layer the
/// caller uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// The signal rebuilt from nearest-centroid shapes, same length as the
    /// input. Samples past the last full window are zero.
    pub reconstruction: Vec<f64>,
    /// Per-sample absolute difference between input and reconstruction.
    pub error: Vec<f64>,
    /// Largest error value.
    pub max_error: f64,
    /// Index of the largest error (first index on ties).
    pub max_error_index: usize,
    /// Value of the configured percentile of the error distribution.
    pub error_percentile: f64,
}
