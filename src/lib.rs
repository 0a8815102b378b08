//! Classical algorithms over graphs stored as adjacency lists.
//!
//! Nodes are dense integer ids ([graph::NodeId]) and graphs are plain values:
//! an [graph::AdjacencyList] is one slot of neighbors per node.
//! Undirected graphs are adjacency lists whose arcs are reciprocal.
//!
//! # What is in here
//!
//! *   [algorithm::DfsConfig] and [algorithm::Dfs]: a configurable depth-first
//!     traversal, which turns into an early-exit search as soon as a
//!     conditional visitor is configured.
//! *   Connectivity built on top of it: connected components, bipartite check,
//!     acyclic check, topological sort and Tarjan's strongly connected components.
//! *   Minimum spanning forests: Kruskal over a [graph::WeightedEdgeList] and
//!     Prim over a [graph::LabeledUndirected].
//!
//! ```rust
//! use adjgraph::{algorithm::*, graph::*};
//!
//! let g = AdjacencyList::from(vec![vec![1], vec![2], vec![0, 3], vec![]]);
//! let sccs = g.tarjan();
//! assert_eq!(sccs.len(), 2);
//! assert!(g.topological().is_empty());
//! ```
pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
