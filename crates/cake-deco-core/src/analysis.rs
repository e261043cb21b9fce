//! End-to-end clustering pipeline over the annotation table.

use tracing::info;

use crate::annotation::{AnnotationRow, Label};
use crate::clustering::{
    cluster_count, ClusteringResult, DecorationClustering, KMeansConfig, StandardKMeans,
};
use crate::config::FEATURE_DIM;
use crate::error::Result;
use crate::features::feature_matrix;

/// An annotation row with its numeric features and assigned cluster.
#[derive(Clone, Debug)]
pub struct ClusteredRow {
    pub row: AnnotationRow,
    /// Binary encoding of (cream, fruits, sprinkle_toppings).
    pub features: [f32; FEATURE_DIM],
    /// Cluster id in `[0, n_clusters)`.
    pub cluster: usize,
}

/// Output of the clustering pipeline.
///
/// Same rows, same order as the input table, each with a cluster id
/// attached. Nothing here is persisted; every run recomputes it.
#[derive(Clone, Debug)]
pub struct ClusteredTable {
    pub rows: Vec<ClusteredRow>,
    pub n_clusters: usize,
    pub result: ClusteringResult,
}

/// Run the full pipeline: feature mapping, count policy, k-means,
/// assignment zip.
///
/// # Errors
///
/// [`crate::error::ClusteringError::TooFewRows`] for tables of zero or one
/// rows; the clusterer is never invoked in that case.
pub fn cluster_annotations(rows: &[AnnotationRow], seed: u64) -> Result<ClusteredTable> {
    let n_clusters = cluster_count(rows.len())?;
    info!(
        "automatic cluster count: {} (rows = {})",
        n_clusters,
        rows.len()
    );

    let vectors = feature_matrix(rows);
    let config = KMeansConfig {
        k: n_clusters,
        seed,
        ..KMeansConfig::default()
    };
    let result = StandardKMeans::new().cluster(&vectors, &config)?;

    let mut clustered = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        clustered.push(ClusteredRow {
            row: row.clone(),
            features: vectors[i],
            cluster: result.assignments[i],
        });
    }

    Ok(ClusteredTable {
        rows: clustered,
        n_clusters,
        result,
    })
}

/// Per-attribute yes-counts backing the topping distribution view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToppingSummary {
    pub cream: usize,
    pub fruits: usize,
    pub sprinkles: usize,
    pub total: usize,
}

impl ToppingSummary {
    /// Count yes labels per column, independently.
    pub fn from_rows(rows: &[AnnotationRow]) -> Self {
        let mut summary = Self {
            total: rows.len(),
            ..Self::default()
        };
        for row in rows {
            if row.cream == Label::Yes {
                summary.cream += 1;
            }
            if row.fruits == Label::Yes {
                summary.fruits += 1;
            }
            if row.sprinkle_toppings == Label::Yes {
                summary.sprinkles += 1;
            }
        }
        summary
    }

    /// Share of rows for a given count, in percent.
    pub fn percent(&self, count: usize) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            count as f32 * 100.0 / self.total as f32
        }
    }
}
