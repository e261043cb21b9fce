//! Types for clustering results.

use crate::config::FEATURE_DIM;

/// A single k-means cluster over decoration feature vectors.
#[derive(Clone, Debug)]
pub struct DecorationCluster {
    /// Mean of the member feature vectors.
    pub centroid: [f32; FEATURE_DIM],

    /// Row indices (into the input table) assigned to this cluster.
    pub members: Vec<usize>,
}

impl DecorationCluster {
    pub fn new(centroid: [f32; FEATURE_DIM], members: Vec<usize>) -> Self {
        Self { centroid, members }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }
}

/// Result of one k-means run.
///
/// `assignments` is the contract surface: one cluster id per input row,
/// same order as the input, each id in `[0, k)`. The per-cluster records
/// and quality numbers exist for reporting.
#[derive(Clone, Debug)]
pub struct ClusteringResult {
    /// Per-row cluster id, parallel to the input rows.
    pub assignments: Vec<usize>,

    /// The clusters, indexed by cluster id.
    pub clusters: Vec<DecorationCluster>,

    /// Iterations actually run.
    pub iterations: usize,

    /// Whether max centroid movement fell below the threshold.
    pub converged: bool,

    /// Within-cluster sum of squares; lower is tighter.
    pub wcss: f32,
}

impl ClusteringResult {
    pub fn new(
        assignments: Vec<usize>,
        clusters: Vec<DecorationCluster>,
        iterations: usize,
        converged: bool,
        wcss: f32,
    ) -> Self {
        Self {
            assignments,
            clusters,
            iterations,
            converged,
            wcss,
        }
    }

    #[inline]
    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Total points across all clusters; equals the input row count.
    pub fn total_points(&self) -> usize {
        self.clusters.iter().map(|c| c.len()).sum()
    }
}
