//! Graph modeling and shortest-path solvers.
//!
//! This crate provides a small toolkit for index-based graphs and implicit
//! grids:
//!
//! - **Priority queue** with a fixed order ([`PriorityQueue`])
//! - **Graph containers** built once from an edge list ([`WeightedGraph`],
//!   [`UnweightedGraph`])
//! - **Grid BFS** over any [`Pather`] ([`shortest_path_in_grid`],
//!   [`grid_distances`])
//! - **Dijkstra** single-source shortest paths ([`dijkstra::shortest_path_in_graph`],
//!   [`dijkstra::distances_from`])
//! - **Exhaustive search** for simple paths and Hamiltonian paths/cycles
//!   ([`ExhaustiveSearch`])
//!
//! "No path" is a normal outcome (`None`); invalid input is a [`PathError`].
//!
//! # Choosing a solver
//!
//! | Need | Solver | Cost |
//! |---|---|---|
//! | Uniform-cost grid moves | [`shortest_path_in_grid`] | O(V + E) |
//! | Weighted shortest path | [`dijkstra::shortest_path_in_graph`] | O((V + E) log V) |
//! | Visit every element | [`ExhaustiveSearch::visit_all_elements_in_graph`] | exponential |
//! | Cross-checking Dijkstra on tiny graphs | [`ExhaustiveSearch::shortest_path_in_graph`] | exponential |

mod bfs;
pub mod dijkstra;
mod error;
mod exhaustive;
mod graph;
mod limits;
mod queue;
mod record;
mod traits;
mod walker;

pub use bfs::{grid_distances, shortest_path_in_grid};
pub use error::PathError;
pub use exhaustive::ExhaustiveSearch;
pub use graph::{Edge, Index, Link, UnweightedGraph, Weight, WeightedGraph};
pub use limits::{DEFAULT_MAX_VISIT_ALL_NODES, SearchLimits};
pub use queue::{Order, PriorityQueue};
pub use record::{GraphPath, GridPath};
pub use traits::{FnPather, Graph, Pather};
pub use walker::{Moves, TileWalker};
