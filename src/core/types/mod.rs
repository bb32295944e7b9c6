// src/core/types/mod.rs

use serde::{Deserialize, Serialize};

/// A labeled face embedding: one fixed-length feature vector plus the person
/// identifier it was enrolled under.
///
/// Records are immutable once constructed; the tree node that stores a record
/// is its sole owner. Dimensionality and label bounds are checked against the
/// owning index's configuration at the insertion boundary, not here, because
/// the bounds are per-index configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceRecord {
    pub embedding: Vec<f32>,
    pub person_id: String,
}

impl FaceRecord {
    pub fn new(embedding: Vec<f32>, person_id: impl Into<String>) -> Self {
        Self { embedding, person_id: person_id.into() }
    }

    /// Dimensionality of this record's embedding.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}

/// One match returned by a nearest-neighbor query: the enrolled label, a copy
/// of the stored embedding, and the true Euclidean distance to the query.
///
/// The distance is reported as `f64`: squared distances are accumulated in
/// double precision and the square root is taken once, at reporting time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub person_id: String,
    pub embedding: Vec<f32>,
    pub distance: f64,
}
