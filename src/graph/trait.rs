use crate::graph::*;

/// One outgoing arc as seen by algorithms.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct OutArc {
    pub to: NodeId,
    /// `None` for plain adjacency lists.
    pub label: Option<Label>,
}

/// Neighbor access shared by plain and labeled adjacency lists.
///
/// Arcs of a node are indexed `0..out_degree(n)` in stored order.
/// Algorithms in this crate only see graphs through this trait.
pub trait Adjacency {
    /// Number of nodes.
    fn order(&self) -> usize;
    fn out_degree(&self, n: NodeId) -> usize;
    /// The `x`-th arc leaving `n`.
    fn arc(&self, n: NodeId, x: usize) -> OutArc;

    fn arcs(&self, n: NodeId) -> Box<dyn Iterator<Item = OutArc> + '_> {
        Box::new((0..self.out_degree(n)).map(move |x| self.arc(n, x)))
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId>> {
        Box::new((0..self.order()).map(NodeId::new))
    }

    /// Total number of arcs.
    fn arc_size(&self) -> usize {
        self.nodes().map(|n| self.out_degree(n)).sum()
    }
}
