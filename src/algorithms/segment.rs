use crate::algorithms::window::WindowCurve;
use crate::core::error::{Error, Result};

/// Slice `signal` into owned, fixed-length, possibly overlapping segments.
///
/// Segments start at offsets `0, stride, 2*stride, ...` for as long as a
/// full `window_len` fits. Trailing samples that cannot fill a final
/// segment are dropped; this is documented lossy behavior, not an error.
/// Each segment is an independent copy so downstream windowing can mutate
/// it freely.
///
/// Returns `floor((N - W) / S) + 1` segments for `N >= W`, zero otherwise.
pub fn sliding_segments(signal: &[f64], window_len: usize, stride: usize) -> Result<Vec<Vec<f64>>> {
    if window_len < 1 {
        return Err(Error::InvalidParameter {
            name: "window_len",
            value: window_len as f64,
            constraint: "must be at least 1",
        });
    }
    if stride < 1 {
        return Err(Error::InvalidParameter {
            name: "stride",
            value: stride as f64,
            constraint: "must be at least 1",
        });
    }

    let mut segments = Vec::new();
    let mut start = 0;
    while start + window_len <= signal.len() {
        segments.push(signal[start..start + window_len].to_vec());
        start += stride;
    }
    Ok(segments)
}

/// Extract every training segment and apply the window curve to each.
///
/// The result vectors are the feature vectors fed to clustering.
pub fn windowed_segments(
    signal: &[f64],
    curve: &WindowCurve,
    stride: usize,
) -> Result<Vec<Vec<f64>>> {
    let mut segments = sliding_segments(signal, curve.len(), stride)?;
    for segment in &mut segments {
        curve.apply(segment);
    }
    Ok(segments)
}
