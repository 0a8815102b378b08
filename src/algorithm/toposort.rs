use super::{acyclic::CycleGuard, ControlFlow, Dfs, Visitor};
use crate::graph::*;
use tracing::debug;

/// Topological ordering of directed graphs.
pub trait TopologicalSort
where
    Self: Adjacency + Sized,
{
    /// Orders all nodes so that every arc goes from an earlier node to a later one.
    ///
    /// This is the reversed depth-first postorder, walking from every unvisited
    /// node in ascending id order.
    /// Returns an empty ordering if the graph has a cycle anywhere.
    fn topological(&self) -> Vec<NodeId> {
        let mut guard = CycleGuard::new(self.order());
        let mut post = Postorder(Vec::with_capacity(self.order()));
        let handlers: Vec<Box<dyn Visitor + '_>> = vec![Box::new(&mut guard), Box::new(&mut post)];
        let mut dfs = Dfs::with_handlers(handlers);
        for n in self.nodes() {
            if dfs.run(self, n).is_break() {
                drop(dfs);
                debug!(back_arc = ?guard.back_arc, "cyclic graph has no topological order");
                return vec![];
            }
        }
        drop(dfs);
        post.0.reverse();
        post.0
    }
}

impl<G: Adjacency> TopologicalSort for G {}

struct Postorder(Vec<NodeId>);

impl Visitor for Postorder {
    fn finish(&mut self, n: NodeId, _parent: Option<NodeId>) {
        self.0.push(n);
    }
}
