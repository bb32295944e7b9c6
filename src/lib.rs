#![forbid(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

//! # Embedix: a KD-tree nearest-neighbor index for face embeddings
//!
//! `embedix` indexes fixed-length face-embedding vectors under person labels
//! and answers "who is this" queries by returning the N stored embeddings
//! closest to a query vector under Euclidean distance. It features:
//! - A KD-tree over K-dimensional points with incremental insertion
//! - Bounded N-nearest-neighbor search with branch-and-bound pruning
//! - A reader-biased lock guarding one shared tree against concurrent callers
//! - Validation of dimensionality and label bounds before any mutation
//!
//! The surrounding service layer (transport, request parsing, response
//! encoding) is an external collaborator; this crate is the index it calls
//! into.

pub mod api;
pub mod core;

// Re-export key types for easier use by library consumers
pub use crate::api::FaceIndex;
pub use crate::core::common::EmbedixError;
pub use crate::core::index::NearestNeighborIndex;

/// Core result type for the library
pub type Result<T> = std::result::Result<T, EmbedixError>;

#[cfg(test)]
mod tests {
    use crate::api::{FaceIndex, FaceRecord, IndexConfig};
    use crate::{EmbedixError, NearestNeighborIndex};
    use approx::assert_relative_eq;
    use std::sync::Arc;
    use std::thread;

    fn small_index() -> FaceIndex {
        let config = IndexConfig::builder().dimension(2).build().unwrap();
        FaceIndex::new(config).unwrap()
    }

    #[test]
    fn enroll_and_query_round_trip() {
        let index = small_index();
        index.construct().unwrap();

        for (coords, id) in [
            ([2.0, 3.0], "a"),
            ([5.0, 4.0], "b"),
            ([9.0, 6.0], "c"),
            ([4.0, 7.0], "d"),
            ([8.0, 1.0], "e"),
            ([7.0, 2.0], "f"),
        ] {
            index.insert(FaceRecord::new(coords.to_vec(), id)).unwrap();
        }
        assert_eq!(index.len().unwrap(), 6);

        let results = index.nearest_n(&[9.0, 2.0], 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].person_id, "e");
        assert_relative_eq!(results[0].distance, 2.0_f64.sqrt(), epsilon = 1e-6);
        assert_eq!(results[1].person_id, "f");
        assert_relative_eq!(results[1].distance, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn construct_resets_and_is_idempotent() {
        let index = small_index();
        index.insert(FaceRecord::new(vec![1.0, 1.0], "a")).unwrap();
        assert_eq!(index.len().unwrap(), 1);

        index.construct().unwrap();
        assert!(index.is_empty().unwrap());
        assert!(index.nearest_n(&[1.0, 1.0], 5).unwrap().is_empty());

        index.construct().unwrap();
        assert!(index.is_empty().unwrap());

        // The index remains usable after a reset.
        index.insert(FaceRecord::new(vec![2.0, 2.0], "b")).unwrap();
        assert_eq!(index.len().unwrap(), 1);
    }

    #[test]
    fn validation_failures_leave_index_unchanged() {
        let index = small_index();
        index.insert(FaceRecord::new(vec![1.0, 1.0], "a")).unwrap();

        let err = index.insert(FaceRecord::new(vec![1.0, 1.0, 1.0], "bad")).unwrap_err();
        assert!(matches!(err, EmbedixError::VectorDimensionMismatch { expected: 2, actual: 3 }));
        assert!(err.is_validation());

        let err = index.insert(FaceRecord::new(vec![1.0, 1.0], "")).unwrap_err();
        assert!(matches!(err, EmbedixError::EmptyLabel));

        let err = index.nearest_n(&[1.0, 1.0], 0).unwrap_err();
        assert!(matches!(err, EmbedixError::InvalidNeighborCount(0)));

        let err = index.nearest_n(&[1.0], 1).unwrap_err();
        assert!(matches!(err, EmbedixError::VectorDimensionMismatch { expected: 2, actual: 1 }));

        assert_eq!(index.len().unwrap(), 1);
    }

    #[test]
    fn label_byte_budget_is_enforced() {
        let index = small_index();

        // 99 encoded bytes fit the 100-byte buffer budget; 100 do not.
        let at_limit = "x".repeat(99);
        index.insert(FaceRecord::new(vec![1.0, 1.0], at_limit)).unwrap();

        let over_limit = "x".repeat(100);
        let err = index.insert(FaceRecord::new(vec![2.0, 2.0], over_limit)).unwrap_err();
        assert!(matches!(err, EmbedixError::LabelTooLong { len: 100, max: 99 }));
        assert_eq!(index.len().unwrap(), 1);

        // Multi-byte UTF-8 counts in encoded bytes, not characters.
        let multibyte = "é".repeat(50); // 100 bytes
        let err = index.insert(FaceRecord::new(vec![3.0, 3.0], multibyte)).unwrap_err();
        assert!(matches!(err, EmbedixError::LabelTooLong { len: 100, max: 99 }));
    }

    #[test]
    fn duplicate_embeddings_under_distinct_labels() {
        let index = small_index();
        index.insert(FaceRecord::new(vec![4.0, 4.0], "x")).unwrap();
        index.insert(FaceRecord::new(vec![4.0, 4.0], "y")).unwrap();

        let results = index.nearest_n(&[4.0, 4.0], 2).unwrap();
        let mut labels: Vec<&str> = results.iter().map(|r| r.person_id.as_str()).collect();
        labels.sort_unstable();
        assert_eq!(labels, vec!["x", "y"]);
        for result in &results {
            assert_relative_eq!(result.distance, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn concurrent_inserts_and_queries() {
        let index = Arc::new(FaceIndex::with_dimension(4).unwrap());

        let mut handles = Vec::new();
        for t in 0..4 {
            let index = Arc::clone(&index);
            handles.push(thread::spawn(move || {
                for i in 0..50 {
                    let v = (t * 50 + i) as f32;
                    index
                        .insert(FaceRecord::new(
                            vec![v, v + 0.5, v + 1.0, v + 1.5],
                            format!("person-{}-{}", t, i),
                        ))
                        .unwrap();
                }
            }));
        }
        for _ in 0..4 {
            let index = Arc::clone(&index);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    let results = index.nearest_n(&[10.0, 10.5, 11.0, 11.5], 3).unwrap();
                    for pair in results.windows(2) {
                        assert!(pair[0].distance <= pair[1].distance);
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(index.len().unwrap(), 200);
        let results = index.nearest_n(&[0.0, 0.5, 1.0, 1.5], 1).unwrap();
        assert_eq!(results[0].person_id, "person-0-0");
        assert_relative_eq!(results[0].distance, 0.0, epsilon = 1e-9);
    }
}
