// src/core/index/kdtree/error.rs

use crate::core::common::EmbedixError;
use std::fmt;

/// Errors produced by KD-tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    /// A record or query vector does not match the tree's dimensionality.
    DimensionMismatch { expected: usize, actual: usize },
    /// A query asked for fewer than one neighbor.
    InvalidNeighborCount(usize),
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "KD-Tree dimension mismatch: expected {}, got {}", expected, actual)
            }
            Self::InvalidNeighborCount(n) => {
                write!(f, "KD-Tree neighbor count must be at least 1, got {}", n)
            }
        }
    }
}

impl std::error::Error for KdTreeError {}

impl From<KdTreeError> for EmbedixError {
    fn from(err: KdTreeError) -> Self {
        match err {
            KdTreeError::DimensionMismatch { expected, actual } => {
                Self::VectorDimensionMismatch { expected, actual }
            }
            KdTreeError::InvalidNeighborCount(n) => Self::InvalidNeighborCount(n),
        }
    }
}
