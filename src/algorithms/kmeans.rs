use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::error::{Error, Result};
use crate::metrics::euclidean::nearest;

/// Minimum number of training vectors before dispatching the assignment
/// scan to rayon. Below this, thread-dispatch overhead exceeds the gain.
#[cfg(feature = "parallel")]
const MIN_PARALLEL_VECTORS: usize = 256;

/// Fits a fixed set of representative shapes (centroids) to windowed
/// segments via Lloyd's algorithm, then answers nearest-centroid queries.
///
/// Two logical states: untrained and trained. `predict` and `centroids`
/// return [`Error::NotFitted`] until `fit` has succeeded.
///
/// Fitting minimizes within-cluster sum of squared distances. Convergence
/// to a local optimum is expected; there is no global-optimum guarantee.
/// Results are reproducible only when a seed is supplied: initialization
/// samples centroids from the training set, and an unseeded run draws that
/// sample from OS entropy.
#[derive(Debug, Clone)]
pub struct ShapeClusterer {
    n_clusters: usize,
    max_iter: usize,
    seed: Option<u64>,
    centroids: Option<Vec<Vec<f64>>>,
}

impl ShapeClusterer {
    pub fn new(n_clusters: usize, max_iter: usize, seed: Option<u64>) -> Result<Self> {
        if n_clusters < 1 {
            return Err(Error::InvalidParameter {
                name: "n_clusters",
                value: n_clusters as f64,
                constraint: "must be at least 1",
            });
        }
        if max_iter < 1 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                value: max_iter as f64,
                constraint: "must be at least 1",
            });
        }
        Ok(Self {
            n_clusters,
            max_iter,
            seed,
            centroids: None,
        })
    }

    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    pub fn is_fitted(&self) -> bool {
        self.centroids.is_some()
    }

    /// The fitted centroid vectors, in index order.
    pub fn centroids(&self) -> Result<&[Vec<f64>]> {
        self.centroids.as_deref().ok_or(Error::NotFitted)
    }

    /// Partition `vectors` into `n_clusters` groups and store the group
    /// means as centroids.
    ///
    /// Requires at least as many training vectors as clusters; K is never
    /// silently clamped. All vectors must share one length.
    ///
    /// A cluster that loses every member during iteration keeps its
    /// previous centroid (seeded from a real training vector, so still a
    /// valid shape). Iteration stops when no assignment changes or after
    /// `max_iter` passes.
    pub fn fit(&mut self, vectors: &[Vec<f64>]) -> Result<()> {
        if vectors.len() < self.n_clusters {
            return Err(Error::InsufficientData {
                needed: self.n_clusters,
                available: vectors.len(),
            });
        }
        let dim = vectors[0].len();
        for vector in vectors {
            if vector.len() != dim {
                return Err(Error::ShapeMismatch {
                    expected: dim,
                    actual: vector.len(),
                });
            }
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Initialize from distinct training vectors.
        let mut centroids: Vec<Vec<f64>> =
            rand::seq::index::sample(&mut rng, vectors.len(), self.n_clusters)
                .into_iter()
                .map(|i| vectors[i].clone())
                .collect();

        let mut labels: Vec<usize> = Vec::new();
        for _ in 0..self.max_iter {
            let new_labels = assign(&centroids, vectors);
            if new_labels == labels {
                break;
            }
            labels = new_labels;

            // Recompute centroids as member means, accumulated serially in
            // index order so fit output does not depend on thread count.
            let mut sums = vec![vec![0.0; dim]; self.n_clusters];
            let mut counts = vec![0usize; self.n_clusters];
            for (vector, &label) in vectors.iter().zip(&labels) {
                counts[label] += 1;
                for (sum, &sample) in sums[label].iter_mut().zip(vector) {
                    *sum += sample;
                }
            }
            for (cluster, (sum, &count)) in sums.iter().zip(&counts).enumerate() {
                if count > 0 {
                    let inv = 1.0 / count as f64;
                    for (c, &s) in centroids[cluster].iter_mut().zip(sum) {
                        *c = s * inv;
                    }
                }
            }
        }

        self.centroids = Some(centroids);
        Ok(())
    }

    /// Index of the centroid nearest to `query` (ties to the lowest index).
    pub fn predict(&self, query: &[f64]) -> Result<usize> {
        let centroids = self.centroids.as_ref().ok_or(Error::NotFitted)?;
        let dim = centroids[0].len();
        if query.len() != dim {
            return Err(Error::ShapeMismatch {
                expected: dim,
                actual: query.len(),
            });
        }
        Ok(nearest(centroids, query))
    }
}

/// Nearest-centroid label for every vector.
///
/// Each vector's assignment is independent, so the parallel path produces
/// exactly the same labels as the serial one.
fn assign(centroids: &[Vec<f64>], vectors: &[Vec<f64>]) -> Vec<usize> {
    #[cfg(feature = "parallel")]
    if vectors.len() >= MIN_PARALLEL_VECTORS {
        use rayon::prelude::*;
        return vectors
            .par_iter()
            .map(|vector| nearest(centroids, vector))
            .collect();
    }
    vectors
        .iter()
        .map(|vector| nearest(centroids, vector))
        .collect()
}
