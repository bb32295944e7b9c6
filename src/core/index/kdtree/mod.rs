// src/core/index/kdtree/mod.rs

//! KD-tree nearest-neighbor index over face embeddings.

pub use self::error::KdTreeError;
use self::tree::KdTree;
use super::NearestNeighborIndex;
use crate::core::common::lock_utils::{read_lock_poisoned, write_lock_poisoned};
use crate::core::common::EmbedixError;
use crate::core::config::IndexConfig;
use crate::core::types::{FaceRecord, Neighbor};
use std::sync::RwLock;
use tracing::{debug, info};

// Modules within the kdtree index
mod error;
mod search;
mod tree;

#[cfg(test)]
mod tests;

/// `KdTreeIndex`: a shared, lock-guarded KD-tree over face embeddings,
/// implementing the `NearestNeighborIndex` trait.
///
/// One instance is intended to be shared (behind an `Arc`) by concurrently
/// arriving callers. Queries take the read lock; `construct` and `insert`
/// take the write lock, so no query ever observes a partially attached node.
/// Every operation acquires and releases the lock wholly; nothing is held
/// across a return boundary.
///
/// `construct` is destructive. The lock keeps it structurally safe against
/// in-flight operations, but draining traffic around a reinitialization is
/// the calling layer's responsibility.
#[derive(Debug)]
pub struct KdTreeIndex {
    config: IndexConfig,
    tree: RwLock<KdTree>,
}

impl KdTreeIndex {
    /// Creates a new, empty `KdTreeIndex` for the given configuration.
    ///
    /// # Errors
    /// Returns `EmbedixError::Configuration` if the configuration is invalid.
    pub fn new(config: IndexConfig) -> Result<Self, EmbedixError> {
        config.validate()?;
        let tree = RwLock::new(KdTree::new(config.dimension));
        info!(dimension = config.dimension, "KD-tree index constructed");
        Ok(Self { config, tree })
    }

    /// Creates an index with the given dimensionality and the default label
    /// budget.
    ///
    /// # Errors
    /// Returns `EmbedixError::Configuration` if `dimension` is zero.
    pub fn with_dimension(dimension: usize) -> Result<Self, EmbedixError> {
        Self::new(IndexConfig::builder().dimension(dimension).build()?)
    }

    /// The configuration this index was built with.
    pub const fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Validates an enrollment record against this index's configuration.
    /// Runs before any lock is taken; a rejected record never mutates the tree.
    fn validate_record(&self, record: &FaceRecord) -> Result<(), EmbedixError> {
        if record.dimension() != self.config.dimension {
            return Err(EmbedixError::VectorDimensionMismatch {
                expected: self.config.dimension,
                actual: record.dimension(),
            });
        }
        if record.person_id.is_empty() {
            return Err(EmbedixError::EmptyLabel);
        }
        let len = record.person_id.len();
        if len > self.config.max_label_bytes {
            return Err(EmbedixError::LabelTooLong { len, max: self.config.max_label_bytes });
        }
        Ok(())
    }
}

impl NearestNeighborIndex for KdTreeIndex {
    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn len(&self) -> Result<usize, EmbedixError> {
        Ok(self.tree.read().map_err(read_lock_poisoned)?.len())
    }

    fn construct(&self) -> Result<(), EmbedixError> {
        let mut tree = self.tree.write().map_err(write_lock_poisoned)?;
        tree.clear();
        info!(dimension = self.config.dimension, "KD-tree reset to empty");
        Ok(())
    }

    fn insert(&self, record: FaceRecord) -> Result<(), EmbedixError> {
        self.validate_record(&record)?;
        let mut tree = self.tree.write().map_err(write_lock_poisoned)?;
        tree.insert(record)?;
        debug!(len = tree.len(), "embedding inserted");
        Ok(())
    }

    fn nearest_n(&self, query: &[f32], n: usize) -> Result<Vec<Neighbor>, EmbedixError> {
        if n == 0 {
            return Err(EmbedixError::InvalidNeighborCount(n));
        }
        if query.len() != self.config.dimension {
            return Err(EmbedixError::VectorDimensionMismatch {
                expected: self.config.dimension,
                actual: query.len(),
            });
        }

        let tree = self.tree.read().map_err(read_lock_poisoned)?;
        let neighbors = tree.nearest_n(query, n)?;
        debug!(requested = n, returned = neighbors.len(), "nearest-neighbor query served");
        Ok(neighbors)
    }
}
