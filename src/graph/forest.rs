use crate::graph::*;

/// Where a node hangs in a spanning forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PathEnd {
    /// Parent node. `None` for roots and for nodes never reached.
    pub from: Option<NodeId>,
    /// Number of nodes on the path from the root, i.e. 1 for roots, 0 for unreached nodes.
    pub len: usize,
}

/// A spanning forest as parent pointers.
///
/// A leaf bit is set iff no node has it as parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FromList {
    pub paths: Vec<PathEnd>,
    pub leaves: Bits,
    /// Longest `len` among `paths`.
    pub max_len: usize,
}

impl FromList {
    /// A forest of `n` unreached nodes.
    pub fn new(n: usize) -> Self {
        Self {
            paths: vec![PathEnd::default(); n],
            leaves: Bits::new(n),
            max_len: 0,
        }
    }

    pub fn order(&self) -> usize {
        self.paths.len()
    }

    pub fn is_reached(&self, n: NodeId) -> bool {
        self.paths[n.to_raw()].len > 0
    }

    /// Root of the tree containing `n`, or `None` if `n` is unreached.
    pub fn root_of(&self, n: NodeId) -> Option<NodeId> {
        if !self.is_reached(n) {
            return None;
        }
        let mut cur = n;
        while let Some(p) = self.paths[cur.to_raw()].from {
            cur = p;
        }
        Some(cur)
    }

    /// Nodes from the root down to `n`. Empty if `n` is unreached.
    pub fn path_to(&self, n: NodeId) -> Vec<NodeId> {
        let len = self.paths[n.to_raw()].len;
        let mut res = vec![NodeId::MIN; len];
        let mut cur = Some(n);
        for slot in res.iter_mut().rev() {
            match cur {
                Some(c) => {
                    *slot = c;
                    cur = self.paths[c.to_raw()].from;
                }
                None => break,
            }
        }
        res
    }

    /// Arcs from parents to children, labeled by `labels[child]`.
    pub fn transpose_labeled(&self, labels: &[Label]) -> LabeledAdjacencyList {
        let mut res = LabeledAdjacencyList::new(self.paths.len());
        for (n, p) in self.paths.iter().enumerate() {
            if let Some(fr) = p.from {
                res.0[fr.to_raw()].push(Half {
                    to: NodeId::new(n),
                    label: labels[n],
                });
            }
        }
        res
    }

    /// Arcs from parents to children.
    pub fn transpose(&self) -> AdjacencyList {
        let mut res = AdjacencyList::new(self.paths.len());
        for (n, p) in self.paths.iter().enumerate() {
            if let Some(fr) = p.from {
                res.0[fr.to_raw()].push(NodeId::new(n));
            }
        }
        res
    }
}
