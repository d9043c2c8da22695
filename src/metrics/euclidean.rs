/// Squared Euclidean distance between two equal-length vectors.
///
/// Kept in the squared domain: nearest-neighbor comparisons are monotonic
/// in the square, so the sqrt is never needed.
#[inline]
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Index of the centroid nearest to `query` by Euclidean distance.
///
/// Ties break to the lowest index (strict `<` while scanning in order).
/// `centroids` must be non-empty and every centroid must match the query
/// length; both hold by construction for a fitted clusterer.
pub fn nearest(centroids: &[Vec<f64>], query: &[f64]) -> usize {
    debug_assert!(!centroids.is_empty());
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, centroid) in centroids.iter().enumerate() {
        let dist = squared_distance(centroid, query);
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }
    best_idx
}
