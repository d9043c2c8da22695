//! Anomaly detection for periodic waveforms via learned shape dictionaries.
//!
//! A dictionary of "normal" waveform shapes is fitted by clustering
//! windowed, overlapping segments of a training signal. Any signal can
//! then be reconstructed by overlap-adding the nearest dictionary shape at
//! each half-window step; regions the dictionary cannot explain show up as
//! large reconstruction error.

pub mod algorithms;
pub mod core;
pub mod metrics;

pub use crate::algorithms::kmeans::ShapeClusterer;
pub use crate::algorithms::reconstruct::reconstruct;
pub use crate::algorithms::score::{error_signal, max_with_index, percentile};
pub use crate::algorithms::segment::{sliding_segments, windowed_segments};
pub use crate::algorithms::window::WindowCurve;
pub use crate::core::config::DetectorConfig;
pub use crate::core::detection::Detection;
pub use crate::core::error::{Error, Result};

/// High-level facade tying the pipeline together: extract, window,
/// cluster, reconstruct, score.
///
/// # Examples
///
/// ```
/// use wavedict_rs::{Detector, DetectorConfig};
///
/// let signal: Vec<f64> = (0..400)
///     .map(|i| (i as f64 * std::f64::consts::TAU / 40.0).sin())
///     .collect();
///
/// let mut config = DetectorConfig::new();
/// config.n_clusters = 20;
/// config.seed = Some(7);
///
/// let detector = Detector::new(config).unwrap();
/// let clusterer = detector.fit(&signal).unwrap();
/// let detection = detector.detect(&signal, &clusterer).unwrap();
/// assert_eq!(detection.error.len(), signal.len());
/// ```
pub struct Detector {
    config: DetectorConfig,
    curve: WindowCurve,
}

impl Detector {
    /// Validate `config` and precompute the window curve.
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        let curve = WindowCurve::new(config.window_len)?;
        Ok(Self { config, curve })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn curve(&self) -> &WindowCurve {
        &self.curve
    }

    /// Learn a shape dictionary from `signal`.
    ///
    /// Segments are extracted at the (fine) training stride for a richer
    /// training set than the half-window stride used at inference; the
    /// clusterer is fitted on their windowed forms. Fails with
    /// [`Error::InsufficientData`] when the signal yields fewer segments
    /// than the configured cluster count.
    pub fn fit(&self, signal: &[f64]) -> Result<ShapeClusterer> {
        let training = windowed_segments(signal, &self.curve, self.config.train_stride)?;
        let mut clusterer = ShapeClusterer::new(
            self.config.n_clusters,
            self.config.max_iter,
            self.config.seed,
        )?;
        clusterer.fit(&training)?;
        Ok(clusterer)
    }

    /// Rebuild `signal` from its nearest dictionary shapes.
    pub fn reconstruct(&self, signal: &[f64], clusterer: &ShapeClusterer) -> Result<Vec<f64>> {
        reconstruct(signal, &self.curve, clusterer)
    }

    /// Reconstruct `signal` and score the per-sample error.
    pub fn detect(&self, signal: &[f64], clusterer: &ShapeClusterer) -> Result<Detection> {
        if signal.len() < self.config.window_len {
            return Err(Error::InsufficientData {
                needed: self.config.window_len,
                available: signal.len(),
            });
        }

        let reconstruction = self.reconstruct(signal, clusterer)?;
        let error = error_signal(signal, &reconstruction)?;
        let (max_error, max_error_index) = max_with_index(&error);
        let error_percentile = percentile(&error, self.config.percentile)?;

        Ok(Detection {
            reconstruction,
            error,
            max_error,
            max_error_index,
            error_percentile,
        })
    }
}
