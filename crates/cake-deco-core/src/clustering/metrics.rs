//! Distance metrics for clustering.

use crate::config::FEATURE_DIM;

/// Squared Euclidean distance between two feature vectors.
///
/// Squared distance avoids the sqrt where only comparisons matter.
#[inline]
pub fn euclidean_distance_squared(a: &[f32; FEATURE_DIM], b: &[f32; FEATURE_DIM]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Euclidean distance between two feature vectors.
#[inline]
pub fn euclidean_distance(a: &[f32; FEATURE_DIM], b: &[f32; FEATURE_DIM]) -> f32 {
    euclidean_distance_squared(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance_squared() {
        let a = [0.0; FEATURE_DIM];
        let b = [1.0; FEATURE_DIM];

        let dist_sq = euclidean_distance_squared(&a, &b);

        // Three unit differences squared
        assert!((dist_sq - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_euclidean_distance() {
        let a = [0.0; FEATURE_DIM];
        let b = [1.0; FEATURE_DIM];

        let expected = (FEATURE_DIM as f32).sqrt();
        assert!((euclidean_distance(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_same_point_is_zero() {
        let a = [1.0, 0.0, 1.0];

        assert!(euclidean_distance(&a, &a).abs() < f32::EPSILON);
    }
}
