//! # circles
//!
//! Connected-component counting over boolean relations ("friend circles").
//!
//! The crate is one small seam plus two algorithms:
//! - [`Relation`] adapts any boolean pairwise relation; [`RelationMatrix`]
//!   is the validated view over a raw `N x N` matrix.
//! - [`mark_reachable`] marks everything reachable from one entity.
//! - [`count_components`] / [`count_components_matrix`] count the disjoint
//!   groups; [`component_labels`] names which group each entity landed in.
//!
//! ```
//! // (0,1) and (2,3) related: two circles.
//! let rows = vec![
//!     vec![false, true, false, false],
//!     vec![true, false, false, false],
//!     vec![false, false, false, true],
//!     vec![false, false, true, false],
//! ];
//! assert_eq!(circles::count_components_matrix(&rows), Ok(2));
//! ```

pub mod components;
pub mod error;
pub mod relation;
pub mod traversal;

pub use components::{component_labels, count_components, count_components_matrix};
pub use error::RelationError;
pub use relation::{Relation, RelationMatrix};
pub use traversal::mark_reachable;
