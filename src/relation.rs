//! Minimal relation adapter traits.

use crate::error::RelationError;

/// A boolean pairwise relation over entities `0..entity_count()`.
///
/// Requirements:
/// - `related(a, b)` must be pure for the lifetime of one computation
///   (no mutation of the relation during traversal).
/// - Implementations are expected to be symmetric
///   (`related(a, b) == related(b, a)`). With an asymmetric implementation
///   the component count reflects directed reachability as given, which is
///   generally not what "friend circles" means.
pub trait Relation {
    fn entity_count(&self) -> usize;
    fn related(&self, a: usize, b: usize) -> bool;
}

/// A validated borrowed view over an `N x N` boolean matrix.
///
/// Construction rejects ragged input; an asymmetric pair of entries is
/// treated as related in both directions (symmetric closure), so counts over
/// arbitrary input are counts of weakly-connected components.
#[derive(Debug, Clone, Copy)]
pub struct RelationMatrix<'a> {
    rows: &'a [Vec<bool>],
}

impl<'a> RelationMatrix<'a> {
    /// Validate that `rows` is square and wrap it.
    ///
    /// Fails fast with [`RelationError::RaggedRow`] before any traversal can
    /// observe the matrix.
    pub fn new(rows: &'a [Vec<bool>]) -> Result<Self, RelationError> {
        let expected = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != expected {
                return Err(RelationError::RaggedRow {
                    row,
                    len: entries.len(),
                    expected,
                });
            }
        }
        Ok(Self { rows })
    }
}

impl Relation for RelationMatrix<'_> {
    fn entity_count(&self) -> usize {
        self.rows.len()
    }

    fn related(&self, a: usize, b: usize) -> bool {
        self.rows[a][b] || self.rows[b][a]
    }
}

#[cfg(feature = "petgraph")]
impl<N, E, Ix> Relation for petgraph::Graph<N, E, petgraph::Undirected, Ix>
where
    Ix: petgraph::graph::IndexType,
{
    fn entity_count(&self) -> usize {
        self.node_count()
    }
    fn related(&self, a: usize, b: usize) -> bool {
        self.find_edge(
            petgraph::graph::NodeIndex::new(a),
            petgraph::graph::NodeIndex::new(b),
        )
        .is_some()
    }
}
