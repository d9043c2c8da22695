use crate::algorithms::kmeans::ShapeClusterer;
use crate::algorithms::segment::sliding_segments;
use crate::algorithms::window::WindowCurve;
use crate::core::error::Result;

/// Rebuild `signal` from the nearest learned shape for each half-window
/// step, by overlap-adding centroids into a zeroed buffer.
///
/// The stride is derived from the curve itself (`W / 2`, floored for odd
/// W) and is deliberately not a parameter: the sin² taper sums to a flat
/// envelope only at 50% overlap, so the summed centroids are NOT divided
/// by an overlap count. Changing either half of that pairing breaks the
/// other.
///
/// Samples past the last full window stay zero in the output; that region
/// was never segmented, so there is nothing to place there.
pub fn reconstruct(
    signal: &[f64],
    curve: &WindowCurve,
    clusterer: &ShapeClusterer,
) -> Result<Vec<f64>> {
    let window_len = curve.len();
    let stride = window_len / 2;

    let segments = sliding_segments(signal, window_len, stride)?;
    let centroids = clusterer.centroids()?;

    let mut output = vec![0.0; signal.len()];
    for (segment_n, mut segment) in segments.into_iter().enumerate() {
        // Window the copy so it lives in the same feature space the
        // clusterer was trained in; the source signal is untouched.
        curve.apply(&mut segment);
        let match_idx = clusterer.predict(&segment)?;

        let pos = segment_n * stride;
        for (out, &sample) in output[pos..pos + window_len]
            .iter_mut()
            .zip(&centroids[match_idx])
        {
            *out += sample;
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::segment::windowed_segments;

    fn fitted(signal: &[f64], curve: &WindowCurve, k: usize) -> ShapeClusterer {
        let training = windowed_segments(signal, curve, 1).unwrap();
        let mut clusterer = ShapeClusterer::new(k, 300, Some(9)).unwrap();
        clusterer.fit(&training).unwrap();
        clusterer
    }

    #[test]
    fn test_output_length_matches_input() {
        let signal: Vec<f64> = (0..50).map(|i| (i as f64 * 0.5).sin()).collect();
        let curve = WindowCurve::new(8).unwrap();
        let clusterer = fitted(&signal, &curve, 4);
        let output = reconstruct(&signal, &curve, &clusterer).unwrap();
        assert_eq!(output.len(), signal.len());
    }

    #[test]
    fn test_unfitted_clusterer_propagates() {
        let signal = vec![1.0; 20];
        let curve = WindowCurve::new(4).unwrap();
        let clusterer = ShapeClusterer::new(2, 100, Some(0)).unwrap();
        assert!(reconstruct(&signal, &curve, &clusterer).is_err());
    }

    #[test]
    fn test_trailing_samples_stay_zero() {
        // N=13, W=4, stride 2: last full segment starts at 8, covers
        // [8, 12). Sample 12 is never reached.
        let signal: Vec<f64> = (0..13).map(|i| 1.0 + (i as f64 * 0.7).sin()).collect();
        let curve = WindowCurve::new(4).unwrap();
        let clusterer = fitted(&signal, &curve, 3);
        let output = reconstruct(&signal, &curve, &clusterer).unwrap();
        assert_eq!(output[12], 0.0);
        assert!(output[..12].iter().any(|&x| x != 0.0));
    }

    #[test]
    fn test_signal_shorter_than_window_reconstructs_to_zeros() {
        let training_signal: Vec<f64> = (0..30).map(|i| (i as f64 * 0.3).sin()).collect();
        let curve = WindowCurve::new(8).unwrap();
        let clusterer = fitted(&training_signal, &curve, 3);

        let short = vec![1.0; 5];
        let output = reconstruct(&short, &curve, &clusterer).unwrap();
        assert_eq!(output, vec![0.0; 5]);
    }

    #[test]
    fn test_periodic_signal_roundtrip_is_close() {
        // Training on the signal itself with one centroid per training
        // segment: every inference segment then has a near-exact centroid,
        // so steady-state error reduces to the small dip of the summed
        // taper envelope.
        let n = 200;
        let signal: Vec<f64> = (0..n)
            .map(|i| (i as f64 * std::f64::consts::TAU / 20.0).sin())
            .collect();
        let curve = WindowCurve::new(8).unwrap();
        let training = windowed_segments(&signal, &curve, 1).unwrap();
        let mut clusterer = ShapeClusterer::new(training.len(), 300, Some(9)).unwrap();
        clusterer.fit(&training).unwrap();
        let output = reconstruct(&signal, &curve, &clusterer).unwrap();

        // Steady state: skip the half-window head and the tail region
        let last_start = ((n - 8) / 4) * 4;
        for i in 4..last_start + 4 {
            assert!(
                (output[i] - signal[i]).abs() < 0.25,
                "sample {i}: reconstruction {} vs signal {}",
                output[i],
                signal[i]
            );
        }
    }
}
