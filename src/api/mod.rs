//! Public API module for the embedix index
//!
//! This module provides the public-facing surface the surrounding service
//! layer calls into: the guarded index type, its input/output record types,
//! and JSON helpers for the service boundary.

pub mod types;

pub use crate::core::common::EmbedixError;
pub use crate::core::config::{
    IndexConfig, IndexConfigBuilder, DEFAULT_DIMENSION, DEFAULT_MAX_LABEL_BYTES,
};
pub use crate::core::index::kdtree::{KdTreeIndex, KdTreeError};
pub use crate::core::index::NearestNeighborIndex;
pub use crate::core::types::{FaceRecord, Neighbor};

/// The service-facing name for the guarded KD-tree index.
pub type FaceIndex = KdTreeIndex;
