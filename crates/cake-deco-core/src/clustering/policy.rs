//! Automatic cluster-count policy.

use crate::config::MAX_CLUSTERS;
use crate::error::ClusteringError;

/// Choose the cluster count for a table of `row_count` rows.
///
/// Returns `min(3, row_count)`. The cap is a design choice trading
/// granularity for stability on small datasets, not something derived
/// from the data's distinct-value count. Zero or one rows cannot form
/// more than one cluster and are rejected with
/// [`ClusteringError::TooFewRows`] before the clusterer ever runs.
pub fn cluster_count(row_count: usize) -> Result<usize, ClusteringError> {
    if row_count <= 1 {
        return Err(ClusteringError::TooFewRows { rows: row_count });
    }
    Ok(MAX_CLUSTERS.min(row_count))
}
