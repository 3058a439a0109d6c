use std::hash::Hash;
use std::marker::PhantomData;

use crate::graph::{Index, Weight};

/// Grid capability: the minimal neighbour-enumeration interface the grid
/// BFS runs on.
///
/// The solver never sees the caller's terrain, only the positions it may
/// move to next. Every move costs one step.
pub trait Pather {
    /// Position type, typically a coordinate such as `pathkit_core::Point`.
    type Pos: Copy + Eq + Hash;

    /// Append the positions reachable in one move from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Self::Pos, buf: &mut Vec<Self::Pos>);
}

/// Index-based adjacency, the seam every graph solver is generic over.
///
/// Implemented by [`WeightedGraph`](crate::WeightedGraph) and
/// [`UnweightedGraph`](crate::UnweightedGraph); callers with their own
/// adjacency model can implement it directly. Weights must be `>= 0`,
/// solvers reject negative ones with
/// [`PathError::UnsupportedWeight`](crate::PathError::UnsupportedWeight).
pub trait Graph {
    /// Number of elements; valid indices are `0..count()`.
    fn count(&self) -> usize;

    /// Append `(to, weight)` for every outgoing edge of `from` into `buf`.
    /// The caller clears `buf` before calling.
    fn successors(&self, from: Index, buf: &mut Vec<(Index, Weight)>);
}

/// A [`Pather`] backed by a closure, for ad-hoc grids.
pub struct FnPather<F, P> {
    f: F,
    _pos: PhantomData<fn(P) -> P>,
}

impl<F, P> FnPather<F, P>
where
    F: Fn(P) -> Vec<P>,
{
    /// Wrap `f`, which lists the neighbours of a position.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _pos: PhantomData,
        }
    }
}

impl<F, P> Pather for FnPather<F, P>
where
    P: Copy + Eq + Hash,
    F: Fn(P) -> Vec<P>,
{
    type Pos = P;

    fn neighbors(&self, p: P, buf: &mut Vec<P>) {
        buf.extend((self.f)(p));
    }
}
