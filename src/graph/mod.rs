//! The data model shared by all algorithms.
//!
//! # Nodes and arcs
//!
//! Nodes are dense ids `0..order`, see [NodeId].
//! Graphs are adjacency lists, one slot of outgoing arcs per node, either plain
//! ([AdjacencyList]) or with a [Label] on every arc ([LabeledAdjacencyList]).
//! Both implement [Adjacency], which is all that algorithms look at.
//!
//! # Undirected graphs
//!
//! [Undirected] and [LabeledUndirected] keep arcs reciprocal: adding edge `u-v`
//! adds arcs `u -> v` and `v -> u`.
//!
//! # Results
//!
//! [Bits] is a set of node ids and [FromList] a spanning forest as parent
//! pointers. Algorithms only write into results handed to them.

mod node;
pub use self::node::*;
mod bits;
pub use self::bits::*;
mod r#trait;
pub use self::r#trait::*;
mod adjacency;
pub use self::adjacency::*;
mod edge;
pub use self::edge::*;
mod forest;
pub use self::forest::*;
pub mod validate;

#[cfg(test)]
pub use self::tests::*;
