//! Immutable, index-based graph containers.
//!
//! Both containers are built once from an element count and an edge list
//! and never change afterwards. Nodes carry no payload: callers keep their
//! own side table from [`Index`] to domain objects.

use std::collections::HashSet;

use crate::error::PathError;
use crate::traits::Graph;

/// Dense node identifier in `[0, count)`.
pub type Index = usize;

/// Edge and path weight. Sums are checked, never wrapped.
pub type Weight = i64;

/// A weighted edge from `a` to `b`.
///
/// An undirected edge (`directional == false`) also yields the reciprocal
/// edge `b -> a` with the same weight when the graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: Index,
    pub b: Index,
    pub weight: Weight,
    pub directional: bool,
}

impl Edge {
    /// A one-way edge `a -> b`.
    pub const fn directed(a: Index, b: Index, weight: Weight) -> Self {
        Self {
            a,
            b,
            weight,
            directional: true,
        }
    }

    /// A two-way edge `a <-> b`.
    pub const fn undirected(a: Index, b: Index, weight: Weight) -> Self {
        Self {
            a,
            b,
            weight,
            directional: false,
        }
    }

    const fn reciprocal(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
            ..self
        }
    }
}

/// An unweighted edge from `a` to `b`; every traversal costs 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub a: Index,
    pub b: Index,
    pub directional: bool,
}

impl Link {
    /// A one-way link `a -> b`.
    pub const fn directed(a: Index, b: Index) -> Self {
        Self {
            a,
            b,
            directional: true,
        }
    }

    /// A two-way link `a <-> b`.
    pub const fn undirected(a: Index, b: Index) -> Self {
        Self {
            a,
            b,
            directional: false,
        }
    }

    const fn reciprocal(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
            ..self
        }
    }
}

fn check_endpoints(a: Index, b: Index, count: usize) -> Result<(), PathError> {
    for index in [a, b] {
        if index >= count {
            return Err(PathError::InvalidGraph { index, count });
        }
    }
    Ok(())
}

/// Validate a solver's start or end index against `count`.
pub(crate) fn ensure_index(index: Index, count: usize) -> Result<(), PathError> {
    if index >= count {
        return Err(PathError::IndexOutOfRange { index, count });
    }
    Ok(())
}

/// Load the successors of `from` into `buf` (cleared first), rejecting
/// dangling indices and negative weights.
pub(crate) fn checked_successors<G: Graph + ?Sized>(
    graph: &G,
    from: Index,
    buf: &mut Vec<(Index, Weight)>,
) -> Result<(), PathError> {
    buf.clear();
    graph.successors(from, buf);
    let count = graph.count();
    for &(to, weight) in buf.iter() {
        ensure_index(to, count)?;
        if weight < 0 {
            return Err(PathError::UnsupportedWeight { from, to, weight });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// WeightedGraph
// ---------------------------------------------------------------------------

/// Weighted adjacency built once from an edge list.
///
/// Outgoing edges are de-duplicated on the `(a, b, weight)` triple: two
/// edges with the same endpoints and weight collapse into one, regardless
/// of which of them was declared directional. Edges with the same endpoints
/// but different weights are all kept. Iteration follows first-insertion
/// order.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl WeightedGraph {
    /// Build a graph over `count` elements.
    ///
    /// Fails with [`PathError::InvalidGraph`] if an endpoint is outside
    /// `[0, count)` and with [`PathError::UnsupportedWeight`] if a weight is
    /// negative.
    pub fn new(count: usize, edges: impl IntoIterator<Item = Edge>) -> Result<Self, PathError> {
        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); count];
        let mut seen: HashSet<(Index, Index, Weight)> = HashSet::new();
        let mut merged = 0usize;

        for edge in edges {
            check_endpoints(edge.a, edge.b, count)?;
            if edge.weight < 0 {
                return Err(PathError::UnsupportedWeight {
                    from: edge.a,
                    to: edge.b,
                    weight: edge.weight,
                });
            }

            let reciprocal = (!edge.directional).then(|| edge.reciprocal());
            for e in std::iter::once(edge).chain(reciprocal) {
                if seen.insert((e.a, e.b, e.weight)) {
                    adjacency[e.a].push(e);
                } else {
                    merged += 1;
                }
            }
        }

        let edge_count = seen.len();
        log::debug!(
            "weighted graph: {} elements, {} directional edges, {} duplicates merged",
            count,
            edge_count,
            merged
        );
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directional edges, reciprocals included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing edges of `from`. Empty if `from` is out of range.
    pub fn directional_edges(&self, from: Index) -> &[Edge] {
        self.adjacency.get(from).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Graph for WeightedGraph {
    fn count(&self) -> usize {
        self.adjacency.len()
    }

    fn successors(&self, from: Index, buf: &mut Vec<(Index, Weight)>) {
        buf.extend(self.directional_edges(from).iter().map(|e| (e.b, e.weight)));
    }
}

// ---------------------------------------------------------------------------
// UnweightedGraph
// ---------------------------------------------------------------------------

/// Unweighted adjacency built once from a link list.
///
/// Links are kept as a plain list per node; repeated links are not merged.
#[derive(Debug, Clone)]
pub struct UnweightedGraph {
    adjacency: Vec<Vec<Link>>,
}

impl UnweightedGraph {
    /// Build a graph over `count` elements.
    ///
    /// Fails with [`PathError::InvalidGraph`] if an endpoint is outside
    /// `[0, count)`.
    pub fn new(count: usize, links: impl IntoIterator<Item = Link>) -> Result<Self, PathError> {
        let mut adjacency: Vec<Vec<Link>> = vec![Vec::new(); count];
        for link in links {
            check_endpoints(link.a, link.b, count)?;
            adjacency[link.a].push(link);
            if !link.directional {
                adjacency[link.b].push(link.reciprocal());
            }
        }
        log::debug!(
            "unweighted graph: {} elements, {} directional links",
            count,
            adjacency.iter().map(Vec::len).sum::<usize>()
        );
        Ok(Self { adjacency })
    }

    /// Number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directional links, reciprocals included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing links of `from`. Empty if `from` is out of range.
    pub fn directional_edges(&self, from: Index) -> &[Link] {
        self.adjacency.get(from).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Graph for UnweightedGraph {
    fn count(&self) -> usize {
        self.adjacency.len()
    }

    fn successors(&self, from: Index, buf: &mut Vec<(Index, Weight)>) {
        buf.extend(self.directional_edges(from).iter().map(|l| (l.b, 1)));
    }
}
