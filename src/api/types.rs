// src/api/types.rs

//! JSON boundary helpers for the surrounding service layer.
//!
//! The service layer owns the wire protocol; these helpers only fix the JSON
//! shapes it exchanges with the index: an enrollment record
//! `{embedding, person_id}` in, a neighbor list
//! `[{person_id, embedding, distance}]` out.

use crate::core::common::EmbedixError;
use crate::core::types::{FaceRecord, Neighbor};

/// Serializes a neighbor list for a query response.
///
/// # Errors
/// Returns `EmbedixError::Json` if serialization fails.
pub fn neighbors_to_json(neighbors: &[Neighbor]) -> Result<String, EmbedixError> {
    Ok(serde_json::to_string(neighbors)?)
}

/// Deserializes an enrollment record from a JSON request body.
///
/// Only the shape is checked here; dimensionality and label bounds are
/// enforced by the index at insertion.
///
/// # Errors
/// Returns `EmbedixError::Json` if the body is not a well-formed record.
pub fn record_from_json(json: &str) -> Result<FaceRecord, EmbedixError> {
    Ok(serde_json::from_str(json)?)
}
