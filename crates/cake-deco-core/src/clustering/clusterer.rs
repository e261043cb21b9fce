//! The k-means clusterer.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::algorithms::{build_clusters, compute_centroids, compute_wcss, kmeans_plus_plus_init};
use super::config::KMeansConfig;
use super::metrics::{euclidean_distance, euclidean_distance_squared};
use super::types::ClusteringResult;
use crate::config::FEATURE_DIM;
use crate::error::ClusteringError;

/// The clustering routine boundary: given an n-by-3 binary matrix, a
/// cluster count and a seed, return one cluster id in `[0, k)` per row.
pub trait DecorationClustering {
    fn cluster(
        &self,
        vectors: &[[f32; FEATURE_DIM]],
        config: &KMeansConfig,
    ) -> Result<ClusteringResult, ClusteringError>;
}

/// Lloyd's algorithm with seeded k-means++ initialization.
#[derive(Clone, Debug, Default)]
pub struct StandardKMeans;

impl StandardKMeans {
    pub fn new() -> Self {
        Self
    }
}

impl DecorationClustering for StandardKMeans {
    fn cluster(
        &self,
        vectors: &[[f32; FEATURE_DIM]],
        config: &KMeansConfig,
    ) -> Result<ClusteringResult, ClusteringError> {
        if vectors.is_empty() {
            return Err(ClusteringError::EmptyInput);
        }
        if config.k > vectors.len() {
            return Err(ClusteringError::TooManyClusters {
                k: config.k,
                points: vectors.len(),
            });
        }

        debug!(
            "starting k-means: k={}, n={}, max_iter={}, seed={}",
            config.k,
            vectors.len(),
            config.max_iterations,
            config.seed
        );

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut centroids = kmeans_plus_plus_init(vectors, config.k, &mut rng);

        let mut assignments = vec![0usize; vectors.len()];
        let mut iterations = 0;
        let mut converged = false;

        for iter in 0..config.max_iterations {
            iterations = iter + 1;

            // Assignment step
            for (i, vector) in vectors.iter().enumerate() {
                let mut min_dist = f32::MAX;
                let mut best = 0;
                for (j, centroid) in centroids.iter().enumerate() {
                    let dist = euclidean_distance_squared(vector, centroid);
                    if dist < min_dist {
                        min_dist = dist;
                        best = j;
                    }
                }
                assignments[i] = best;
            }

            // Update step
            let new_centroids = compute_centroids(vectors, &assignments, &centroids, config.k);

            let max_movement = centroids
                .iter()
                .zip(new_centroids.iter())
                .map(|(old, new)| euclidean_distance(old, new))
                .fold(0.0f32, f32::max);
            centroids = new_centroids;

            if max_movement < config.convergence_threshold {
                converged = true;
                debug!("converged at iteration {iterations} (movement={max_movement:.2e})");
                break;
            }
        }

        if !converged {
            warn!("k-means did not converge after {iterations} iteration(s)");
        }

        let clusters = build_clusters(&assignments, &centroids, config.k);
        let wcss = compute_wcss(vectors, &assignments, &centroids);

        info!(
            "k-means finished: {} cluster(s), {} iteration(s), wcss={:.4}",
            config.k, iterations, wcss
        );

        Ok(ClusteringResult::new(
            assignments,
            clusters,
            iterations,
            converged,
            wcss,
        ))
    }
}
