use crate::core::error::{Error, Result};

/// Configuration for the detection pipeline.
///
/// `new()` returns the reference defaults (W=32, training stride 2, 150
/// clusters, 98th percentile). The inference stride is not configurable: it
/// is always `window_len / 2`, because the sin² taper only reconstructs a
/// flat envelope at exactly 50% overlap.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Window length W. Must be >= 2.
    pub window_len: usize,
    /// Stride used when extracting training segments. Finer than the
    /// inference stride on purpose: more training shapes per signal.
    pub train_stride: usize,
    /// Number of centroids K to fit. Must not exceed the number of
    /// training segments the signal yields.
    pub n_clusters: usize,
    /// Percentile of the error distribution to report, in [0, 100].
    pub percentile: f64,
    /// Iteration cap for the clustering fit.
    pub max_iter: usize,
    /// Seed for centroid initialization. `None` draws from OS entropy,
    /// making fit results vary across runs.
    pub seed: Option<u64>,
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self {
            window_len: 32,
            train_stride: 2,
            n_clusters: 150,
            percentile: 98.0,
            max_iter: 300,
            seed: None,
        }
    }

    /// Check every parameter constraint, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.window_len < 2 {
            return Err(Error::InvalidParameter {
                name: "window_len",
                value: self.window_len as f64,
                constraint: "must be at least 2",
            });
        }
        if self.train_stride < 1 {
            return Err(Error::InvalidParameter {
                name: "train_stride",
                value: self.train_stride as f64,
                constraint: "must be at least 1",
            });
        }
        if self.n_clusters < 1 {
            return Err(Error::InvalidParameter {
                name: "n_clusters",
                value: self.n_clusters as f64,
                constraint: "must be at least 1",
            });
        }
        if self.max_iter < 1 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                value: self.max_iter as f64,
                constraint: "must be at least 1",
            });
        }
        if !(0.0..=100.0).contains(&self.percentile) {
            return Err(Error::InvalidParameter {
                name: "percentile",
                value: self.percentile,
                constraint: "must be in [0, 100]",
            });
        }
        Ok(())
    }

    /// Inference stride: half a window, rounded down for odd W.
    pub fn inference_stride(&self) -> usize {
        self.window_len / 2
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
