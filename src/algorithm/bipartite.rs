use super::{ArcVisit, ControlFlow, Dfs, Visitor};
use crate::graph::*;

/// Result of a 2-coloring attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bipartition {
    /// Every arc within the component joins `c1` and `c2`.
    /// The start node is in `c1`.
    TwoColoring { c1: Bits, c2: Bits },
    /// Nodes of an odd cycle, starting with the node where the conflict was
    /// found, then back along the depth-first path.
    OddCycle(Vec<NodeId>),
}

impl Bipartition {
    pub fn is_bipartite(&self) -> bool {
        matches!(self, Bipartition::TwoColoring { .. })
    }
}

/// 2-coloring of undirected graphs.
pub trait Bipartite
where
    Self: Adjacency + Sized,
{
    /// Colors the component containing `start`.
    ///
    /// On failure, the evidence is the first conflicting arc found, closed
    /// into a cycle. It is not necessarily the shortest odd cycle.
    fn bipartite(&self, start: NodeId) -> Bipartition {
        let order = self.order();
        let mut coloring = Coloring {
            c1: Bits::new(order),
            c2: Bits::new(order),
            parent: vec![None; order],
            conflict: None,
        };
        coloring.c1.set(start);
        let handlers: Vec<Box<dyn Visitor + '_>> = vec![Box::new(&mut coloring)];
        let _ = Dfs::with_handlers(handlers).run(self, start);
        match coloring.conflict {
            None => Bipartition::TwoColoring {
                c1: coloring.c1,
                c2: coloring.c2,
            },
            Some((from, to)) => Bipartition::OddCycle(coloring.odd_cycle(from, to)),
        }
    }
}

impl<G: Adjacency> Bipartite for G {}

struct Coloring {
    c1: Bits,
    c2: Bits,
    parent: Vec<Option<NodeId>>,
    conflict: Option<(NodeId, NodeId)>,
}

impl Coloring {
    /// `to` is an ancestor of `from` on the depth-first path.
    fn odd_cycle(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        let mut res = vec![to];
        if from == to {
            return res;
        }
        let mut cur = Some(from);
        while let Some(n) = cur {
            if n == to {
                break;
            }
            res.push(n);
            cur = self.parent[n.to_raw()];
        }
        res
    }
}

impl Visitor for Coloring {
    fn is_conditional(&self) -> bool {
        true
    }

    fn arc(&mut self, arc: &ArcVisit) -> ControlFlow<()> {
        let (same, other) = if self.c1.bit(arc.from) {
            (&self.c1, &mut self.c2)
        } else {
            (&self.c2, &mut self.c1)
        };
        if same.bit(arc.to) {
            self.conflict = Some((arc.from, arc.to));
            return ControlFlow::Break(());
        }
        if !other.bit(arc.to) {
            other.set(arc.to);
            self.parent[arc.to.to_raw()] = Some(arc.from);
        }
        ControlFlow::Continue(())
    }
}
