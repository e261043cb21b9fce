//! Edge-case and boundary tests for clustering.

use crate::clustering::clusterer::{DecorationClustering, StandardKMeans};
use crate::clustering::config::KMeansConfig;

use super::helpers::{identical_vectors, three_group_vectors};

#[test]
fn test_identical_points_more_clusters_than_distinct_values() {
    // Five copies of one point, k=3: duplicate centroids are unavoidable
    // but every row must still get an id in range.
    let clusterer = StandardKMeans::new();
    let vectors = identical_vectors(5);
    let config = KMeansConfig::default();

    let result = clusterer.cluster(&vectors, &config).unwrap();

    assert_eq!(result.assignments.len(), 5);
    for &id in &result.assignments {
        assert!(id < 3);
    }
    assert_eq!(result.total_points(), 5);
    assert!(result.wcss < 1e-6);
}

#[test]
fn test_max_iterations_respected() {
    let clusterer = StandardKMeans::new();
    let vectors = three_group_vectors();
    // Impossibly tight threshold forces the iteration cap
    let config = KMeansConfig::new(3, 2, f32::MIN_POSITIVE, 42).unwrap();

    let result = clusterer.cluster(&vectors, &config).unwrap();

    assert!(result.iterations <= 2);
}

#[test]
fn test_all_rows_accounted_for() {
    let clusterer = StandardKMeans::new();
    let vectors = three_group_vectors();
    let config = KMeansConfig::default();

    let result = clusterer.cluster(&vectors, &config).unwrap();

    let mut seen = vec![false; vectors.len()];
    for cluster in &result.clusters {
        for &i in &cluster.members {
            assert!(!seen[i], "row {i} assigned twice");
            seen[i] = true;
        }
    }
    assert!(seen.into_iter().all(|s| s), "every row must appear once");
}

#[test]
fn test_members_agree_with_assignments() {
    let clusterer = StandardKMeans::new();
    let vectors = three_group_vectors();
    let config = KMeansConfig::default();

    let result = clusterer.cluster(&vectors, &config).unwrap();

    for (id, cluster) in result.clusters.iter().enumerate() {
        for &i in &cluster.members {
            assert_eq!(result.assignments[i], id);
        }
    }
}

#[test]
fn test_different_seeds_still_valid() {
    let clusterer = StandardKMeans::new();
    let vectors = three_group_vectors();

    for seed in [0, 7, 42, 1_000_003] {
        let config = KMeansConfig::new(3, 100, 1e-6, seed).unwrap();
        let result = clusterer.cluster(&vectors, &config).unwrap();

        assert_eq!(result.assignments.len(), vectors.len());
        assert!(result.assignments.iter().all(|&id| id < 3));
    }
}

#[test]
fn test_result_clone_and_debug() {
    let clusterer = StandardKMeans::new();
    let vectors = identical_vectors(2);
    let config = KMeansConfig::with_k(1).unwrap();

    let result = clusterer.cluster(&vectors, &config).unwrap();

    let cloned = result.clone();
    assert_eq!(cloned.assignments, result.assignments);

    let debug_str = format!("{result:?}");
    assert!(debug_str.contains("ClusteringResult"));
}
