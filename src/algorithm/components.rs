use super::{ControlFlow, Dfs, Visitor};
use crate::graph::*;

/// Connected components of undirected graphs.
///
/// The graph must be reciprocal. On a directed graph the results
/// depend on the id order and mean little.
pub trait ConnectedComponents
where
    Self: Adjacency + Sized,
{
    /// Component id of every node.
    ///
    /// Walks start from the lowest unvisited id, and components are numbered
    /// from 0 in the order they are discovered.
    fn connected_components(&self) -> Vec<usize> {
        component_walk(self).ids
    }

    /// The lowest id of each component, and the number of nodes in it.
    fn connected_component_reps(&self) -> (Vec<NodeId>, Vec<usize>) {
        let w = component_walk(self);
        (w.reps, w.orders)
    }
}

impl<G: Adjacency> ConnectedComponents for G {}

struct ComponentWalk {
    ids: Vec<usize>,
    reps: Vec<NodeId>,
    orders: Vec<usize>,
    size: usize,
}

impl Visitor for ComponentWalk {
    fn node(&mut self, n: NodeId) -> ControlFlow<()> {
        if self.size == 0 {
            self.reps.push(n);
        }
        self.ids[n.to_raw()] = self.reps.len() - 1;
        self.size += 1;
        ControlFlow::Continue(())
    }

    fn finish(&mut self, _n: NodeId, parent: Option<NodeId>) {
        if parent.is_none() {
            self.orders.push(self.size);
            self.size = 0;
        }
    }
}

fn component_walk<G: Adjacency>(g: &G) -> ComponentWalk {
    let mut walk = ComponentWalk {
        ids: vec![0; g.order()],
        reps: vec![],
        orders: vec![],
        size: 0,
    };
    let handlers: Vec<Box<dyn Visitor + '_>> = vec![Box::new(&mut walk)];
    let mut dfs = Dfs::with_handlers(handlers);
    for n in g.nodes() {
        let res = dfs.run(g, n);
        debug_assert!(res.is_continue());
    }
    drop(dfs);
    walk
}
