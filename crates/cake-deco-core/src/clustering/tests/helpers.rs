//! Shared fixtures for clustering tests.

use crate::config::FEATURE_DIM;

/// Three well-separated binary groups: all-zero, all-one, cream-only.
pub fn three_group_vectors() -> Vec<[f32; FEATURE_DIM]> {
    vec![
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
    ]
}

/// `n` copies of the same point.
pub fn identical_vectors(n: usize) -> Vec<[f32; FEATURE_DIM]> {
    vec![[1.0, 0.0, 0.0]; n]
}
