//! K-means clustering over 3D binary decoration features.
//!
//! # Overview
//!
//! Groups annotation rows by their (cream, fruits, sprinkle_toppings)
//! feature vectors. The cluster count is chosen by [`cluster_count`]:
//! `min(3, rows)`, with one row or none rejected outright.
//!
//! # Algorithm
//!
//! 1. Initialize k centroids with seeded k-means++
//! 2. Assign each vector to the nearest centroid (squared Euclidean)
//! 3. Recompute centroids as the mean of assigned vectors
//! 4. Repeat until centroid movement drops below the threshold or the
//!    iteration cap is hit
//!
//! # Fail-fast validation
//!
//! - the feature matrix must not be empty
//! - k must be > 0 and <= the number of points
//! - max_iterations must be > 0, the threshold finite and positive
//!
//! A fixed seed reproduces the exact same assignment on identical input.

mod algorithms;
mod clusterer;
mod config;
mod metrics;
mod policy;
#[cfg(test)]
mod tests;
mod types;

pub use clusterer::{DecorationClustering, StandardKMeans};
pub use config::KMeansConfig;
pub use policy::cluster_count;
pub use types::{ClusteringResult, DecorationCluster};
