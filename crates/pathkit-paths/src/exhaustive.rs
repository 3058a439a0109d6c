//! Exhaustive branch-and-bound searches over simple paths.
//!
//! Both searches keep a FIFO frontier of partial paths. Each entry carries
//! its own visited set and path, so a node may be reached again along a
//! different route: the searches enumerate simple paths, not a single
//! breadth-first expansion. Once a complete solution (the incumbent)
//! exists, any continuation whose weight already reaches the incumbent's is
//! dropped.
//!
//! That bound is not an admissible estimate of the remaining cost, so the
//! worst case stays exponential in graph density. Memory is the first limit
//! hit: the frontier grows with the number of partial paths, each holding a
//! full copy of its visited set and path. Use [`SearchLimits`] to turn a
//! runaway search into [`PathError::BudgetExceeded`], and prefer
//! [`dijkstra`](crate::dijkstra) whenever no visiting constraint is needed.

use std::collections::VecDeque;

use crate::error::PathError;
use crate::graph::{Index, Weight, checked_successors, ensure_index};
use crate::limits::{Budget, SearchLimits};
use crate::record::GraphPath;
use crate::traits::Graph;

/// Fixed-size bit set over element indices.
#[derive(Clone)]
struct NodeSet {
    words: Vec<u64>,
}

impl NodeSet {
    fn new(count: usize) -> Self {
        Self {
            words: vec![0; count.div_ceil(64)],
        }
    }

    #[inline]
    fn insert(&mut self, i: Index) {
        self.words[i / 64] |= 1u64 << (i % 64);
    }

    #[inline]
    fn contains(&self, i: Index) -> bool {
        self.words[i / 64] & (1u64 << (i % 64)) != 0
    }
}

/// One partial path on the frontier.
#[derive(Clone)]
struct Branch {
    at: Index,
    visited: NodeSet,
    path: Vec<Index>,
    weight: Weight,
}

impl Branch {
    fn root(at: Index, count: usize) -> Self {
        let mut visited = NodeSet::new(count);
        visited.insert(at);
        Self {
            at,
            visited,
            path: vec![at],
            weight: 0,
        }
    }

    fn extend(&self, to: Index, weight: Weight) -> Self {
        let mut next = self.clone();
        next.at = to;
        next.visited.insert(to);
        next.path.push(to);
        next.weight = weight;
        next
    }
}

/// Whether `weight` can still beat the incumbent.
#[inline]
fn improves(best: &Option<GraphPath>, weight: Weight) -> bool {
    best.as_ref().is_none_or(|b| weight < b.weight)
}

/// Exhaustive solvers configured with [`SearchLimits`].
///
/// Intended for puzzle-scale graphs only. The searches are reentrant: the
/// incumbent lives in each call, never in `self`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch {
    limits: SearchLimits,
}

impl ExhaustiveSearch {
    /// Search with default limits (no expansion or frontier budget).
    pub fn new() -> Self {
        Self::default()
    }

    /// Search with explicit limits.
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Abort after expanding `max` frontier entries.
    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.limits.max_expansions = Some(max);
        self
    }

    /// Abort once the frontier holds more than `max` entries.
    pub fn with_max_frontier(mut self, max: usize) -> Self {
        self.limits.max_frontier = Some(max);
        self
    }

    /// Set the visit-all node ceiling.
    pub fn with_max_visit_all_nodes(mut self, max: usize) -> Self {
        self.limits.max_visit_all_nodes = max;
        self
    }

    /// The limits in effect.
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Cheapest simple path from `from` to `to`, by exhaustive enumeration.
    ///
    /// Agrees with [`dijkstra::shortest_path_in_graph`](crate::dijkstra::shortest_path_in_graph)
    /// on the optimal weight whenever it finishes. When several paths share
    /// the optimum, the first one found is kept.
    pub fn shortest_path_in_graph<G: Graph + ?Sized>(
        &self,
        graph: &G,
        from: Index,
        to: Index,
    ) -> Result<Option<GraphPath>, PathError> {
        let count = graph.count();
        ensure_index(from, count)?;
        ensure_index(to, count)?;
        if from == to {
            return Ok(Some(GraphPath {
                path: vec![from],
                weight: 0,
            }));
        }

        let mut budget = Budget::new(self.limits);
        let mut best: Option<GraphPath> = None;
        let mut frontier: VecDeque<Branch> = VecDeque::new();
        let mut nbuf: Vec<(Index, Weight)> = Vec::new();
        frontier.push_back(Branch::root(from, count));

        while let Some(branch) = frontier.pop_front() {
            budget.expand(frontier.len())?;
            // The incumbent may have improved since this entry was queued.
            if !improves(&best, branch.weight) {
                continue;
            }

            checked_successors(graph, branch.at, &mut nbuf)?;
            for &(ni, ew) in nbuf.iter() {
                if branch.visited.contains(ni) {
                    continue;
                }
                let weight = branch
                    .weight
                    .checked_add(ew)
                    .ok_or(PathError::WeightOverflow {
                        from: branch.at,
                        to: ni,
                    })?;
                if !improves(&best, weight) {
                    continue;
                }
                if ni == to {
                    let mut path = branch.path.clone();
                    path.push(ni);
                    log::trace!("exhaustive path: incumbent improved to {}", weight);
                    best = Some(GraphPath { path, weight });
                    continue;
                }
                frontier.push_back(branch.extend(ni, weight));
                budget.admit(frontier.len())?;
            }
        }

        log::debug!(
            "exhaustive path {} -> {}: {} expansions, best {:?}",
            from,
            to,
            budget.expansions(),
            best.as_ref().map(|b| b.weight)
        );
        Ok(best)
    }

    /// Cheapest path starting at `root` that visits every element exactly
    /// once (a Hamiltonian path).
    ///
    /// With `return_to_start`, the path must also close with an edge back to
    /// `root` (a Hamiltonian cycle): it then starts and ends at `root` and
    /// holds `count + 1` indices. A single-element graph needs a self-loop
    /// to form a cycle. Returns `Ok(None)` when no such path exists, and
    /// [`PathError::GraphTooLarge`] above the configured node ceiling.
    pub fn visit_all_elements_in_graph<G: Graph + ?Sized>(
        &self,
        graph: &G,
        root: Index,
        return_to_start: bool,
    ) -> Result<Option<GraphPath>, PathError> {
        let count = graph.count();
        ensure_index(root, count)?;
        if count > self.limits.max_visit_all_nodes {
            return Err(PathError::GraphTooLarge {
                count,
                limit: self.limits.max_visit_all_nodes,
            });
        }

        let mut budget = Budget::new(self.limits);
        let mut best: Option<GraphPath> = None;
        let mut frontier: VecDeque<Branch> = VecDeque::new();
        let mut nbuf: Vec<(Index, Weight)> = Vec::new();
        frontier.push_back(Branch::root(root, count));

        while let Some(branch) = frontier.pop_front() {
            budget.expand(frontier.len())?;
            if !improves(&best, branch.weight) {
                continue;
            }

            if branch.path.len() == count && !return_to_start {
                log::trace!("visit-all: incumbent improved to {}", branch.weight);
                best = Some(GraphPath {
                    path: branch.path,
                    weight: branch.weight,
                });
                continue;
            }

            checked_successors(graph, branch.at, &mut nbuf)?;

            if branch.path.len() == count {
                // Every element visited: close the cycle with the cheapest
                // edge back to the root, if any.
                let closing = nbuf
                    .iter()
                    .filter(|&&(ni, _)| ni == root)
                    .map(|&(_, ew)| ew)
                    .min();
                let Some(ew) = closing else {
                    continue;
                };
                let weight = branch
                    .weight
                    .checked_add(ew)
                    .ok_or(PathError::WeightOverflow {
                        from: branch.at,
                        to: root,
                    })?;
                if improves(&best, weight) {
                    let mut path = branch.path;
                    path.push(root);
                    log::trace!("visit-all: incumbent improved to {}", weight);
                    best = Some(GraphPath { path, weight });
                }
                continue;
            }

            for &(ni, ew) in nbuf.iter() {
                if branch.visited.contains(ni) {
                    continue;
                }
                let weight = branch
                    .weight
                    .checked_add(ew)
                    .ok_or(PathError::WeightOverflow {
                        from: branch.at,
                        to: ni,
                    })?;
                if !improves(&best, weight) {
                    continue;
                }
                frontier.push_back(branch.extend(ni, weight));
                budget.admit(frontier.len())?;
            }
        }

        log::debug!(
            "visit-all from {} (return: {}): {} expansions, best {:?}",
            root,
            return_to_start,
            budget.expansions(),
            best.as_ref().map(|b| b.weight)
        );
        Ok(best)
    }
}
