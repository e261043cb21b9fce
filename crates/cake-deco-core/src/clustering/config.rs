//! Configuration for k-means clustering.

use crate::config::{DEFAULT_SEED, MAX_CLUSTERS};
use crate::error::ClusteringError;

/// Validated k-means parameters.
#[derive(Clone, Debug)]
pub struct KMeansConfig {
    /// Number of clusters. Must be > 0 and <= the number of points.
    pub k: usize,

    /// Iteration cap. Must be > 0.
    pub max_iterations: usize,

    /// Convergence threshold on max centroid movement. Must be a finite
    /// positive number.
    pub convergence_threshold: f32,

    /// RNG seed for the k-means++ initialization. Identical input and
    /// seed reproduce the same assignment.
    pub seed: u64,
}

impl KMeansConfig {
    /// Create a configuration, validating every parameter up front.
    pub fn new(
        k: usize,
        max_iterations: usize,
        convergence_threshold: f32,
        seed: u64,
    ) -> Result<Self, ClusteringError> {
        if k == 0 {
            return Err(ClusteringError::InvalidConfig("k must be > 0".into()));
        }
        if max_iterations == 0 {
            return Err(ClusteringError::InvalidConfig(
                "max_iterations must be > 0".into(),
            ));
        }
        if !convergence_threshold.is_finite() || convergence_threshold <= 0.0 {
            return Err(ClusteringError::InvalidConfig(
                "convergence_threshold must be a finite positive number".into(),
            ));
        }

        Ok(Self {
            k,
            max_iterations,
            convergence_threshold,
            seed,
        })
    }

    /// Configuration for `k` clusters with the default iteration cap,
    /// threshold and seed.
    pub fn with_k(k: usize) -> Result<Self, ClusteringError> {
        Self::new(k, 100, 1e-6, DEFAULT_SEED)
    }
}

impl Default for KMeansConfig {
    /// k=3, max_iterations=100, convergence_threshold=1e-6, seed=42.
    fn default() -> Self {
        Self {
            k: MAX_CLUSTERS,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            seed: DEFAULT_SEED,
        }
    }
}
