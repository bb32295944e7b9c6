// src/core/index/kdtree/tests/mod.rs


use super::tree::{KdNode, KdTree};
use crate::core::types::FaceRecord;

pub(super) fn record(coords: &[f32], person_id: &str) -> FaceRecord {
    FaceRecord::new(coords.to_vec(), person_id)
}

/// Asserts the partition invariant recursively for every node: at depth `d`
/// with axis `a = d % K`, all left-subtree records have `embedding[a]` at
/// most the node's, all right-subtree records at least the node's.
pub(super) fn assert_partition_property(tree: &KdTree) {
    if let Some(root) = tree.root.as_deref() {
        check_node(root, 0, tree.dimension());
    }
}

fn check_node(node: &KdNode, depth: usize, dimension: usize) {
    let axis = depth % dimension;
    let split = node.record.embedding[axis];

    if let Some(left) = node.left.as_deref() {
        for_each_record(left, &mut |record: &FaceRecord| {
            assert!(
                record.embedding[axis] <= split,
                "left subtree of '{}' violates partition on axis {}: {} > {}",
                node.record.person_id,
                axis,
                record.embedding[axis],
                split
            );
        });
        check_node(left, depth + 1, dimension);
    }

    if let Some(right) = node.right.as_deref() {
        for_each_record(right, &mut |record: &FaceRecord| {
            assert!(
                record.embedding[axis] >= split,
                "right subtree of '{}' violates partition on axis {}: {} < {}",
                node.record.person_id,
                axis,
                record.embedding[axis],
                split
            );
        });
        check_node(right, depth + 1, dimension);
    }
}

fn for_each_record(node: &KdNode, f: &mut dyn FnMut(&FaceRecord)) {
    f(&node.record);
    if let Some(left) = node.left.as_deref() {
        for_each_record(left, f);
    }
    if let Some(right) = node.right.as_deref() {
        for_each_record(right, f);
    }
}
