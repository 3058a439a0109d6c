use std::fmt;

use crate::graph::{Index, Weight};

/// Errors raised by graph construction and the graph solvers.
///
/// "No path exists" is never an error: solvers report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An edge endpoint lies outside `[0, count)` at construction time.
    InvalidGraph { index: Index, count: usize },
    /// A solver was asked to start or end at an index outside `[0, count)`.
    IndexOutOfRange { index: Index, count: usize },
    /// A negative edge weight reached a solver that requires `weight >= 0`.
    UnsupportedWeight {
        from: Index,
        to: Index,
        weight: Weight,
    },
    /// Accumulated path weight no longer fits in a [`Weight`].
    WeightOverflow { from: Index, to: Index },
    /// An exhaustive search hit its configured expansion or frontier limit.
    BudgetExceeded { expansions: u64, frontier: usize },
    /// The visit-all search refuses graphs above its node ceiling.
    GraphTooLarge { count: usize, limit: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGraph { index, count } => {
                write!(f, "invalid graph: edge endpoint {index} outside 0..{count}")
            }
            Self::IndexOutOfRange { index, count } => {
                write!(f, "element index {index} outside 0..{count}")
            }
            Self::UnsupportedWeight { from, to, weight } => {
                write!(f, "unsupported negative weight {weight} on edge {from} -> {to}")
            }
            Self::WeightOverflow { from, to } => {
                write!(f, "path weight overflow while relaxing edge {from} -> {to}")
            }
            Self::BudgetExceeded {
                expansions,
                frontier,
            } => write!(
                f,
                "search budget exceeded after {expansions} expansions (frontier {frontier})"
            ),
            Self::GraphTooLarge { count, limit } => {
                write!(f, "graph has {count} elements, visit-all limit is {limit}")
            }
        }
    }
}

impl std::error::Error for PathError {}
