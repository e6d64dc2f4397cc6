//! Typed failures for relation construction and traversal.

use thiserror::Error;

/// Errors surfaced by relation validation and the traversal primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    /// The input matrix is not square: some row's length differs from the
    /// number of rows. Ragged input is rejected eagerly, never padded.
    #[error("relation matrix is ragged: row {row} has {len} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A start entity handed to the traversal primitive is outside `0..count`.
    #[error("entity {entity} out of range for relation over {count} entities")]
    EntityOutOfRange { entity: usize, count: usize },
}
