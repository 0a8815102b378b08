use super::{ArcVisit, ControlFlow, Dfs, Visitor};
use crate::graph::*;
use tracing::debug;

/// Strongly connected components of directed graphs.
pub trait StronglyConnected
where
    Self: Adjacency + Sized,
{
    /// Tarjan's algorithm, O(V+E).
    ///
    /// Components come out in the order they are completed, which is a
    /// reverse topological order of the condensation.
    /// Within a component, nodes are listed in the order they leave the
    /// auxiliary stack.
    fn tarjan(&self) -> Vec<Vec<NodeId>> {
        let mut lowlink = LowLink::new(self.order());
        let handlers: Vec<Box<dyn Visitor + '_>> = vec![Box::new(&mut lowlink)];
        let mut dfs = Dfs::with_handlers(handlers);
        for n in self.nodes() {
            let res = dfs.run(self, n);
            debug_assert!(res.is_continue());
        }
        drop(dfs);
        debug!(
            order = self.order(),
            components = lowlink.components.len(),
            "strongly connected components found"
        );
        lowlink.components
    }
}

impl<G: Adjacency> StronglyConnected for G {}

const UNVISITED: usize = usize::MAX;

struct LowLink {
    index: Vec<usize>,
    low: Vec<usize>,
    next_index: usize,
    on_stack: Bits,
    stack: Vec<NodeId>,
    components: Vec<Vec<NodeId>>,
}

impl LowLink {
    fn new(order: usize) -> Self {
        Self {
            index: vec![UNVISITED; order],
            low: vec![UNVISITED; order],
            next_index: 0,
            on_stack: Bits::new(order),
            stack: vec![],
            components: vec![],
        }
    }
}

impl Visitor for LowLink {
    fn node(&mut self, n: NodeId) -> ControlFlow<()> {
        self.index[n.to_raw()] = self.next_index;
        self.low[n.to_raw()] = self.next_index;
        self.next_index += 1;
        self.stack.push(n);
        self.on_stack.set(n);
        ControlFlow::Continue(())
    }

    fn arc(&mut self, arc: &ArcVisit) -> ControlFlow<()> {
        // unvisited targets are never on the stack
        if self.on_stack.bit(arc.to) {
            let fr = arc.from.to_raw();
            self.low[fr] = self.low[fr].min(self.index[arc.to.to_raw()]);
        }
        ControlFlow::Continue(())
    }

    fn finish(&mut self, n: NodeId, parent: Option<NodeId>) {
        let i = n.to_raw();
        if self.low[i] == self.index[i] {
            let mut component = vec![];
            while let Some(m) = self.stack.pop() {
                self.on_stack.clear(m);
                component.push(m);
                if m == n {
                    break;
                }
            }
            self.components.push(component);
        }
        if let Some(p) = parent {
            let p = p.to_raw();
            self.low[p] = self.low[p].min(self.low[i]);
        }
    }
}
