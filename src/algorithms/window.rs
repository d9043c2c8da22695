use std::f64::consts::PI;

use crate::core::error::{Error, Result};

/// Raised-sine-squared taper applied to segments before clustering and
/// reconstruction.
///
/// Weight formula: `w[i] = sin(pi * i / (W-1))^2`, so both endpoints are
/// exactly zero and the curve peaks at the midpoint. With this shape,
/// half-overlapping windowed segments sum back to (approximately) the
/// original amplitude, which is what makes unnormalized overlap-add
/// reconstruction work. The same curve must be used for feature extraction
/// and reconstruction.
#[derive(Debug, Clone)]
pub struct WindowCurve {
    weights: Vec<f64>,
}

impl WindowCurve {
    /// Build a curve of length `window_len`.
    ///
    /// `window_len < 2` is rejected: the weight formula divides by `W-1`.
    pub fn new(window_len: usize) -> Result<Self> {
        if window_len < 2 {
            return Err(Error::InvalidParameter {
                name: "window_len",
                value: window_len as f64,
                constraint: "must be at least 2",
            });
        }
        let denom = (window_len - 1) as f64;
        let weights = (0..window_len)
            .map(|i| {
                let s = (PI * i as f64 / denom).sin();
                s * s
            })
            .collect();
        Ok(Self { weights })
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction guarantees at least 2 weights.
        false
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Multiply `segment` element-wise by the curve, in place.
    ///
    /// Callers pass owned segment copies, never a view of the source signal.
    /// A length mismatch is a programming error, not a recoverable
    /// condition: segments are always extracted at the curve's own length.
    pub fn apply(&self, segment: &mut [f64]) {
        assert_eq!(
            segment.len(),
            self.weights.len(),
            "Segment length must equal window length"
        );
        for (sample, &weight) in segment.iter_mut().zip(&self.weights) {
            *sample *= weight;
        }
    }
}
