// src/core/index/kdtree/tree.rs

//! Core KD-tree structures: `KdNode` and `KdTree`.

use super::error::KdTreeError;
use super::search;
use crate::core::types::{FaceRecord, Neighbor};

/// A node in the KD-tree.
///
/// Each node exclusively owns one `FaceRecord` and up to two child subtrees.
/// The splitting axis is derived from the node's depth (`depth % k`) during
/// traversal and is never stored.
#[derive(Debug)]
pub(super) struct KdNode {
    pub(super) record: FaceRecord,
    pub(super) left: Option<Box<KdNode>>,
    pub(super) right: Option<Box<KdNode>>,
}

impl KdNode {
    pub(super) fn new(record: FaceRecord) -> Self {
        Self { record, left: None, right: None }
    }
}

/// The KD-tree proper: an optional root plus the fixed dimensionality K.
///
/// Partition invariant: for a node at depth `d` with axis `a = d % K`, every
/// record in its left subtree has `embedding[a] <= node.embedding[a]` and
/// every record in its right subtree has `embedding[a] >= node.embedding[a]`.
/// Equal coordinates always route left, keeping insertion deterministic.
///
/// The tree is never rebalanced, so its shape depends on insertion order.
/// Pathological orders (already axis-sorted input) degrade search from
/// near-logarithmic to near-linear; an accepted limitation of the structure.
#[derive(Debug)]
pub(super) struct KdTree {
    pub(super) root: Option<Box<KdNode>>,
    dimension: usize,
    len: usize,
}

impl KdTree {
    pub(super) fn new(dimension: usize) -> Self {
        debug_assert!(dimension > 0, "tree dimensionality must be at least 1");
        Self { root: None, dimension, len: 0 }
    }

    /// Dimensionality K of the vectors this tree indexes.
    pub(super) const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of records currently stored.
    pub(super) const fn len(&self) -> usize {
        self.len
    }

    pub(super) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discards all stored records. Dropping the root reclaims every node.
    pub(super) fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts one record, growing the tree by exactly one node.
    ///
    /// Descends from the root comparing on the axis implied by depth: values
    /// less than or equal to the node's go left, greater go right. The record
    /// is attached at the first absent child slot. Duplicate coordinates are
    /// permitted and create distinct nodes; the tree does not deduplicate.
    pub(super) fn insert(&mut self, record: FaceRecord) -> Result<(), KdTreeError> {
        if record.dimension() != self.dimension {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.dimension,
                actual: record.dimension(),
            });
        }

        let mut depth = 0;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            let axis = depth % self.dimension;
            slot = if record.embedding[axis] <= node.record.embedding[axis] {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Box::new(KdNode::new(record)));
        self.len += 1;
        Ok(())
    }

    /// Returns up to `n` stored records closest to `query`, ascending by
    /// distance. Fewer than `n` records in the tree yield a shorter result;
    /// an empty tree yields an empty one. Both are success, not failure.
    ///
    /// The relative order of results at exactly equal distances follows the
    /// candidate heap drain and is not guaranteed stable.
    pub(super) fn nearest_n(&self, query: &[f32], n: usize) -> Result<Vec<Neighbor>, KdTreeError> {
        if n == 0 {
            return Err(KdTreeError::InvalidNeighborCount(n));
        }
        if query.len() != self.dimension {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }
        Ok(search::find_nearest(self, query, n))
    }
}
