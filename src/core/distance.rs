// src/core/distance.rs

//! Euclidean distance over embedding vectors.
//!
//! Ranking and pruning use the squared distance only; the square root is
//! taken once per reported result.

/// Calculates the squared Euclidean distance between two vectors.
///
/// Per-axis differences are computed in `f32` and accumulated in `f64`,
/// matching the precision the reported distances are derived from.
///
/// Callers are expected to have validated that both slices have the same
/// length; mismatched lengths are a programming error here.
#[must_use]
pub fn squared_euclidean(v1: &[f32], v2: &[f32]) -> f64 {
    debug_assert_eq!(v1.len(), v2.len(), "distance operands must have equal dimension");

    v1.iter().zip(v2.iter()).map(|(a, b)| f64::from(a - b).powi(2)).sum()
}

/// Calculates the true Euclidean distance between two vectors.
#[must_use]
pub fn euclidean(v1: &[f32], v2: &[f32]) -> f64 {
    squared_euclidean(v1, v2).sqrt()
}
