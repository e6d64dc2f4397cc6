//! Component counting and labeling.

use crate::error::RelationError;
use crate::relation::{Relation, RelationMatrix};
use crate::traversal::mark_reachable_into;

/// Count the connected components of a relation.
///
/// Iterates entities in ascending index order; each still-unvisited entity
/// roots one new component, and a traversal from it claims everything the
/// component contains. By the time the loop finishes every entity belongs to
/// exactly one discovered component.
///
/// The count is a property of the relation alone: for a fixed relation it is
/// the same integer no matter what order traversal visits entities in.
/// Returns 0 for an empty relation.
pub fn count_components<R: Relation>(relation: &R) -> usize {
    let n = relation.entity_count();
    let mut visited = vec![false; n];
    // One stack buffer reused for all traversals in this run.
    let mut stack = Vec::with_capacity(n);
    let mut count = 0usize;

    for i in 0..n {
        if !visited[i] {
            mark_reachable_into(relation, i, &mut visited, &mut stack);
            count += 1;
        }
    }
    count
}

/// Count the connected components of a raw boolean matrix.
///
/// Validates that `rows` is square before any traversal begins and fails
/// with [`RelationError::RaggedRow`] otherwise. Asymmetric entries are
/// treated as related in both directions (see [`RelationMatrix`]).
pub fn count_components_matrix(rows: &[Vec<bool>]) -> Result<usize, RelationError> {
    let matrix = RelationMatrix::new(rows)?;
    Ok(count_components(&matrix))
}

/// Label every entity with its component id.
///
/// Labels are dense, `0..count_components(relation)`, assigned in root
/// discovery order (ascending root index). Entities share a label iff they
/// are in the same component.
pub fn component_labels<R: Relation>(relation: &R) -> Vec<usize> {
    let n = relation.entity_count();
    let mut visited = vec![false; n];
    let mut labels = vec![0usize; n];
    let mut stack = Vec::with_capacity(n);
    let mut next = 0usize;

    for root in 0..n {
        if visited[root] {
            continue;
        }
        stack.clear();
        visited[root] = true;
        stack.push(root);
        while let Some(v) = stack.pop() {
            labels[v] = next;
            for i in 0..n {
                if relation.related(v, i) && !visited[i] {
                    visited[i] = true;
                    stack.push(i);
                }
            }
        }
        next += 1;
    }
    labels
}
