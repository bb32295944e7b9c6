// src/core/index/mod.rs

use crate::core::common::EmbedixError;
use crate::core::types::{FaceRecord, Neighbor};
use std::fmt::Debug;

pub mod kdtree;

/// Trait for nearest-neighbor indexes over labeled embedding vectors.
///
/// Implementations guard their own shared state; all methods take `&self` so
/// a single instance can be shared behind an `Arc` by concurrent callers.
pub trait NearestNeighborIndex: Debug + Send + Sync {
    /// Dimensionality K of the vectors this index accepts.
    fn dimension(&self) -> usize;

    /// Number of records currently stored.
    ///
    /// # Errors
    /// Returns `EmbedixError::Lock` if the guarding lock is poisoned.
    fn len(&self) -> Result<usize, EmbedixError>;

    /// Whether the index currently holds no records.
    ///
    /// # Errors
    /// Returns `EmbedixError::Lock` if the guarding lock is poisoned.
    fn is_empty(&self) -> Result<bool, EmbedixError> {
        Ok(self.len()? == 0)
    }

    /// Resets the index to empty, discarding any existing content.
    ///
    /// Idempotent: repeated calls always yield an empty index. Safe to call
    /// before any insert or query.
    fn construct(&self) -> Result<(), EmbedixError>;

    /// Inserts one labeled embedding. Validation failures are reported before
    /// any mutation; the index is never left partially modified.
    fn insert(&self, record: FaceRecord) -> Result<(), EmbedixError>;

    /// Returns up to `n` stored records closest to `query` under Euclidean
    /// distance, sorted ascending. A shorter (possibly empty) result is
    /// success, not failure.
    fn nearest_n(&self, query: &[f32], n: usize) -> Result<Vec<Neighbor>, EmbedixError>;
}
