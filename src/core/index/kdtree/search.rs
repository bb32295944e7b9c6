// src/core/index/kdtree/search.rs

//! Bounded N-nearest-neighbor search with branch-and-bound pruning.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::tree::{KdNode, KdTree};
use crate::core::distance::squared_euclidean;
use crate::core::types::{FaceRecord, Neighbor};

/// A candidate in the bounded best-N heap, borrowing the stored record.
///
/// `BinaryHeap` is a max-heap, so with this ordering the worst kept candidate
/// (largest squared distance) sits at `peek()`, where it can be compared and
/// evicted in O(log n).
#[derive(Debug)]
struct Candidate<'a> {
    distance_sq: f64,
    record: &'a FaceRecord,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.distance_sq == other.distance_sq
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance_sq.partial_cmp(&other.distance_sq)
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// Finds the `n` records closest to `query`, sorted ascending by distance.
///
/// The caller (`KdTree::nearest_n`) has already validated `n >= 1` and the
/// query's dimensionality. The square root of each kept squared distance is
/// taken once here, at reporting time.
pub(super) fn find_nearest(tree: &KdTree, query: &[f32], n: usize) -> Vec<Neighbor> {
    let root = match tree.root.as_deref() {
        Some(node) => node,
        None => return Vec::new(),
    };

    let mut best = BinaryHeap::with_capacity(n);
    search_recursive(root, query, n, 0, tree.dimension(), &mut best);

    best.into_sorted_vec()
        .into_iter()
        .map(|candidate| Neighbor {
            person_id: candidate.record.person_id.clone(),
            embedding: candidate.record.embedding.clone(),
            distance: candidate.distance_sq.sqrt(),
        })
        .collect()
}

fn search_recursive<'a>(
    node: &'a KdNode,
    query: &[f32],
    n: usize,
    depth: usize,
    dimension: usize,
    best: &mut BinaryHeap<Candidate<'a>>,
) {
    let distance_sq = squared_euclidean(query, &node.record.embedding);

    if best.len() < n {
        best.push(Candidate { distance_sq, record: &node.record });
    } else if let Some(worst) = best.peek() {
        // Replace the current worst only on a strict improvement.
        if distance_sq < worst.distance_sq {
            best.pop();
            best.push(Candidate { distance_sq, record: &node.record });
        }
    }

    let axis = depth % dimension;
    let query_coord = query[axis];
    let split_coord = node.record.embedding[axis];

    // Near side first: the side insertion would have taken for the query.
    let (near_child, far_child) = if query_coord <= split_coord {
        (node.left.as_deref(), node.right.as_deref())
    } else {
        (node.right.as_deref(), node.left.as_deref())
    };

    if let Some(child) = near_child {
        search_recursive(child, query, n, depth + 1, dimension, best);
    }

    // The far subtree can only hold an improvement if the hypersphere of the
    // current worst kept distance crosses the splitting plane.
    let plane_distance_sq = f64::from(query_coord - split_coord).powi(2);
    let visit_far = match best.peek() {
        Some(worst) if best.len() >= n => plane_distance_sq < worst.distance_sq,
        _ => true,
    };

    if visit_far {
        if let Some(child) = far_child {
            search_recursive(child, query, n, depth + 1, dimension, best);
        }
    }
}
