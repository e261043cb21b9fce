//! K-means helper routines: seeded k-means++ initialization, centroid
//! updates, cluster assembly.

use rand::Rng;

use super::metrics::euclidean_distance_squared;
use super::types::DecorationCluster;
use crate::config::FEATURE_DIM;

/// Initialize centroids using k-means++.
///
/// The first centroid is drawn uniformly at random; each further centroid
/// is drawn with probability proportional to its squared distance from the
/// nearest existing centroid. All draws come from the caller's RNG, so a
/// fixed seed reproduces the same initialization.
///
/// Callers guarantee `1 <= k <= vectors.len()`.
pub fn kmeans_plus_plus_init<R: Rng>(
    vectors: &[[f32; FEATURE_DIM]],
    k: usize,
    rng: &mut R,
) -> Vec<[f32; FEATURE_DIM]> {
    let n = vectors.len();
    let mut centroids = Vec::with_capacity(k);
    centroids.push(vectors[rng.gen_range(0..n)]);

    // Squared distance from each point to its nearest centroid so far
    let mut min_distances = vec![f32::MAX; n];

    for _ in 1..k {
        let last = centroids[centroids.len() - 1];
        for (i, vector) in vectors.iter().enumerate() {
            let dist = euclidean_distance_squared(vector, &last);
            if dist < min_distances[i] {
                min_distances[i] = dist;
            }
        }

        let total: f32 = min_distances.iter().sum();
        if total == 0.0 {
            // Every point coincides with some centroid already; with binary
            // features this happens whenever k exceeds the distinct points.
            centroids.push(vectors[rng.gen_range(0..n)]);
            continue;
        }

        // Weighted draw proportional to D^2
        let mut target = rng.gen::<f32>() * total;
        let mut chosen = n - 1;
        for (i, &dist) in min_distances.iter().enumerate() {
            if target <= dist {
                chosen = i;
                break;
            }
            target -= dist;
        }
        centroids.push(vectors[chosen]);
    }

    centroids
}

/// Recompute centroids as the mean of assigned points.
///
/// A cluster that lost all its points keeps its previous centroid rather
/// than collapsing to the origin.
pub fn compute_centroids(
    vectors: &[[f32; FEATURE_DIM]],
    assignments: &[usize],
    previous: &[[f32; FEATURE_DIM]],
    k: usize,
) -> Vec<[f32; FEATURE_DIM]> {
    let mut sums = vec![[0.0f32; FEATURE_DIM]; k];
    let mut counts = vec![0usize; k];

    for (i, &cluster) in assignments.iter().enumerate() {
        counts[cluster] += 1;
        for d in 0..FEATURE_DIM {
            sums[cluster][d] += vectors[i][d];
        }
    }

    sums.into_iter()
        .zip(counts)
        .enumerate()
        .map(|(j, (mut sum, count))| {
            if count == 0 {
                return previous[j];
            }
            for elem in sum.iter_mut() {
                *elem /= count as f32;
            }
            sum
        })
        .collect()
}

/// Group row indices by assigned cluster.
pub fn build_clusters(
    assignments: &[usize],
    centroids: &[[f32; FEATURE_DIM]],
    k: usize,
) -> Vec<DecorationCluster> {
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (i, &cluster) in assignments.iter().enumerate() {
        members[cluster].push(i);
    }

    members
        .into_iter()
        .enumerate()
        .map(|(j, member_indices)| DecorationCluster::new(centroids[j], member_indices))
        .collect()
}

/// Within-cluster sum of squares.
pub fn compute_wcss(
    vectors: &[[f32; FEATURE_DIM]],
    assignments: &[usize],
    centroids: &[[f32; FEATURE_DIM]],
) -> f32 {
    vectors
        .iter()
        .zip(assignments.iter())
        .map(|(vector, &cluster)| euclidean_distance_squared(vector, &centroids[cluster]))
        .sum()
}
