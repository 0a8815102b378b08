use super::{ArcVisit, ControlFlow, Dfs, Visitor};
use crate::graph::*;

/// Cycle detection in directed graphs.
pub trait Acyclic
where
    Self: Adjacency + Sized,
{
    fn is_acyclic(&self) -> bool {
        self.back_arc().is_none()
    }

    /// The first arc found closing a cycle, as `(from, to)`.
    ///
    /// Walks start from every unvisited node in ascending id order.
    /// Only one arc is reported, however many cycles there are.
    fn back_arc(&self) -> Option<(NodeId, NodeId)> {
        let mut guard = CycleGuard::new(self.order());
        let handlers: Vec<Box<dyn Visitor + '_>> = vec![Box::new(&mut guard)];
        let mut dfs = Dfs::with_handlers(handlers);
        for n in self.nodes() {
            if dfs.run(self, n).is_break() {
                break;
            }
        }
        drop(dfs);
        guard.back_arc
    }
}

impl<G: Adjacency> Acyclic for G {}

/// Tracks the nodes on the current depth-first path
/// and stops the walk at the first arc into one of them.
pub(crate) struct CycleGuard {
    on_path: Bits,
    pub(crate) back_arc: Option<(NodeId, NodeId)>,
}

impl CycleGuard {
    pub(crate) fn new(order: usize) -> Self {
        Self {
            on_path: Bits::new(order),
            back_arc: None,
        }
    }
}

impl Visitor for CycleGuard {
    fn is_conditional(&self) -> bool {
        true
    }

    fn node(&mut self, n: NodeId) -> ControlFlow<()> {
        self.on_path.set(n);
        ControlFlow::Continue(())
    }

    fn arc(&mut self, arc: &ArcVisit) -> ControlFlow<()> {
        if self.on_path.bit(arc.to) {
            self.back_arc = Some((arc.from, arc.to));
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish(&mut self, n: NodeId, _parent: Option<NodeId>) {
        self.on_path.clear(n);
    }
}
