use crate::core::error::{Error, Result};

/// Per-sample absolute difference between two equal-length signals.
pub fn error_signal(original: &[f64], reconstruction: &[f64]) -> Result<Vec<f64>> {
    if original.len() != reconstruction.len() {
        return Err(Error::ShapeMismatch {
            expected: original.len(),
            actual: reconstruction.len(),
        });
    }
    Ok(original
        .iter()
        .zip(reconstruction)
        .map(|(a, b)| (a - b).abs())
        .collect())
}

/// Largest value and its index; the first index wins on ties.
///
/// # Panics
/// Panics on an empty slice.
pub fn max_with_index(values: &[f64]) -> (f64, usize) {
    assert!(!values.is_empty(), "Cannot take the max of an empty slice");
    let mut max_val = f64::NEG_INFINITY;
    let mut max_idx = 0;
    for (idx, &val) in values.iter().enumerate() {
        if val > max_val {
            max_val = val;
            max_idx = idx;
        }
    }
    (max_val, max_idx)
}

/// P-th percentile of `values` using linear interpolation between order
/// statistics: rank = P/100 * (n-1) over the ascending sort.
///
/// `p` outside [0, 100] is rejected; an empty slice has no percentiles.
pub fn percentile(values: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::InvalidParameter {
            name: "percentile",
            value: p,
            constraint: "must be in [0, 100]",
        });
    }
    if values.is_empty() {
        return Err(Error::InsufficientData {
            needed: 1,
            available: 0,
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    let frac = rank - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
