//! Classic single-source Dijkstra over any [`Graph`].
//!
//! O((V + E) log V) with the binary-heap [`PriorityQueue`]. This is the
//! solver to reach for beyond toy sizes; the exhaustive solvers only exist
//! for visiting constraints Dijkstra cannot express. All weights must be
//! non-negative.

use crate::error::PathError;
use crate::graph::{Index, Weight, checked_successors, ensure_index};
use crate::queue::{Order, PriorityQueue};
use crate::record::GraphPath;
use crate::traits::Graph;

/// Weight and predecessor tables left behind by a run.
struct Tables {
    weights: Vec<Option<Weight>>,
    parents: Vec<Option<Index>>,
}

/// Relax-and-settle loop from `from`. Stops as soon as `target` is settled,
/// or runs until the queue is empty when `target` is `None`.
fn settle<G: Graph + ?Sized>(
    graph: &G,
    from: Index,
    target: Option<Index>,
) -> Result<(Tables, bool), PathError> {
    let count = graph.count();
    let mut tables = Tables {
        weights: vec![None; count],
        parents: vec![None; count],
    };
    let mut settled = vec![false; count];
    let mut open: PriorityQueue<(Weight, Index)> = PriorityQueue::new(Order::Ascending);
    let mut nbuf: Vec<(Index, Weight)> = Vec::new();
    let mut pops = 0usize;

    tables.weights[from] = Some(0);
    open.push((0, from));

    while let Some((current_w, ci)) = open.pop() {
        // Stale entry: a cheaper one already settled this node.
        if settled[ci] {
            continue;
        }
        settled[ci] = true;
        pops += 1;

        if target == Some(ci) {
            log::debug!("dijkstra: settled target {} after {} pops", ci, pops);
            return Ok((tables, true));
        }

        checked_successors(graph, ci, &mut nbuf)?;
        for &(ni, ew) in nbuf.iter() {
            if settled[ni] {
                continue;
            }
            let tentative = current_w
                .checked_add(ew)
                .ok_or(PathError::WeightOverflow { from: ci, to: ni })?;
            if tables.weights[ni].is_some_and(|known| tentative >= known) {
                continue;
            }
            tables.weights[ni] = Some(tentative);
            tables.parents[ni] = Some(ci);
            open.push((tentative, ni));
        }
    }

    log::debug!("dijkstra: queue exhausted after {} pops", pops);
    Ok((tables, false))
}

/// Shortest path from `from` to `to`.
///
/// Returns `Ok(None)` when `to` is unreachable. Fails with
/// [`PathError::IndexOutOfRange`] for a bad endpoint,
/// [`PathError::UnsupportedWeight`] on a negative edge weight and
/// [`PathError::WeightOverflow`] if a path weight exceeds [`Weight::MAX`].
/// For unweighted graphs every edge counts as 1.
pub fn shortest_path_in_graph<G: Graph + ?Sized>(
    graph: &G,
    from: Index,
    to: Index,
) -> Result<Option<GraphPath>, PathError> {
    ensure_index(from, graph.count())?;
    ensure_index(to, graph.count())?;

    let (tables, found) = settle(graph, from, Some(to))?;
    if !found {
        return Ok(None);
    }

    let mut path = vec![to];
    let mut ci = to;
    while let Some(pi) = tables.parents[ci] {
        path.push(pi);
        ci = pi;
    }
    path.reverse();

    Ok(tables.weights[to].map(|weight| GraphPath { path, weight }))
}

/// Shortest-path weight from `from` to every element.
///
/// Entry `i` is `None` when element `i` is unreachable.
pub fn distances_from<G: Graph + ?Sized>(
    graph: &G,
    from: Index,
) -> Result<Vec<Option<Weight>>, PathError> {
    ensure_index(from, graph.count())?;
    let (tables, _) = settle(graph, from, None)?;
    Ok(tables.weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Link, UnweightedGraph, WeightedGraph};

    const A: Index = 0;
    const B: Index = 1;
    const C: Index = 2;
    const D: Index = 3;

    fn scenario() -> WeightedGraph {
        WeightedGraph::new(
            4,
            [
                Edge::undirected(A, B, 40),
                Edge::undirected(A, C, 30),
                Edge::undirected(B, C, 10),
                Edge::undirected(C, D, 10),
            ],
        )
        .unwrap()
    }

    #[test]
    fn picks_cheapest_route() {
        let res = shortest_path_in_graph(&scenario(), A, D).unwrap().unwrap();
        assert_eq!(res.path, vec![A, C, D]);
        assert_eq!(res.weight, 40);
        assert_eq!(res.edges(), 2);
    }

    #[test]
    fn start_is_target() {
        let res = shortest_path_in_graph(&scenario(), B, B).unwrap().unwrap();
        assert_eq!(res.path, vec![B]);
        assert_eq!(res.weight, 0);
    }

    #[test]
    fn respects_direction() {
        let g = WeightedGraph::new(3, [Edge::directed(0, 1, 1), Edge::directed(1, 2, 1)]).unwrap();
        assert!(shortest_path_in_graph(&g, 0, 2).unwrap().is_some());
        assert_eq!(shortest_path_in_graph(&g, 2, 0).unwrap(), None);
    }

    #[test]
    fn isolated_target_is_not_found() {
        // Scenario graph without any edge touching D.
        let g = WeightedGraph::new(
            4,
            [
                Edge::undirected(A, B, 40),
                Edge::undirected(A, C, 30),
                Edge::undirected(B, C, 10),
            ],
        )
        .unwrap();
        assert_eq!(shortest_path_in_graph(&g, A, D).unwrap(), None);
    }

    #[test]
    fn unweighted_counts_edges() {
        let g = UnweightedGraph::new(
            5,
            [
                Link::undirected(0, 1),
                Link::undirected(1, 2),
                Link::undirected(2, 3),
                Link::undirected(0, 4),
                Link::undirected(4, 3),
            ],
        )
        .unwrap();
        let res = shortest_path_in_graph(&g, 0, 3).unwrap().unwrap();
        assert_eq!(res.path, vec![0, 4, 3]);
        assert_eq!(res.weight, 2);
    }

    #[test]
    fn zero_weight_edges() {
        let g = WeightedGraph::new(3, [Edge::directed(0, 1, 0), Edge::directed(1, 2, 0)]).unwrap();
        let res = shortest_path_in_graph(&g, 0, 2).unwrap().unwrap();
        assert_eq!(res.weight, 0);
        assert_eq!(res.path, vec![0, 1, 2]);
    }

    #[test]
    fn distance_table() {
        let g = WeightedGraph::new(
            5,
            [
                Edge::undirected(A, B, 40),
                Edge::undirected(A, C, 30),
                Edge::undirected(B, C, 10),
                Edge::undirected(C, D, 10),
            ],
        )
        .unwrap();
        let d = distances_from(&g, A).unwrap();
        assert_eq!(d, vec![Some(0), Some(40), Some(30), Some(40), None]);
    }

    #[test]
    fn bad_endpoints_are_errors() {
        let g = scenario();
        assert_eq!(
            shortest_path_in_graph(&g, A, 9),
            Err(PathError::IndexOutOfRange { index: 9, count: 4 })
        );
        assert!(distances_from(&g, 4).is_err());
    }

    #[test]
    fn overflow_is_reported() {
        let g = WeightedGraph::new(
            3,
            [
                Edge::directed(0, 1, Weight::MAX),
                Edge::directed(1, 2, 1),
            ],
        )
        .unwrap();
        assert_eq!(
            shortest_path_in_graph(&g, 0, 2),
            Err(PathError::WeightOverflow { from: 1, to: 2 })
        );
    }

    /// Adjacency that skips construction-time validation.
    struct Raw(Vec<Vec<(Index, Weight)>>);

    impl Graph for Raw {
        fn count(&self) -> usize {
            self.0.len()
        }

        fn successors(&self, from: Index, buf: &mut Vec<(Index, Weight)>) {
            buf.extend_from_slice(&self.0[from]);
        }
    }

    #[test]
    fn negative_weight_is_rejected_at_solve_time() {
        let g = Raw(vec![vec![(1, 5)], vec![(2, -1)], vec![]]);
        assert_eq!(
            shortest_path_in_graph(&g, 0, 2),
            Err(PathError::UnsupportedWeight {
                from: 1,
                to: 2,
                weight: -1
            })
        );
    }

    #[test]
    fn dangling_successor_is_rejected() {
        let g = Raw(vec![vec![(7, 1)], vec![]]);
        assert_eq!(
            shortest_path_in_graph(&g, 0, 1),
            Err(PathError::IndexOutOfRange { index: 7, count: 2 })
        );
    }

    #[test]
    fn works_through_trait_objects() {
        let g = scenario();
        let dyn_g: &dyn Graph = &g;
        let res = shortest_path_in_graph(dyn_g, D, A).unwrap().unwrap();
        assert_eq!(res.path, vec![D, C, A]);
        assert_eq!(res.weight, 40);
    }
}
